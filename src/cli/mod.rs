//! Command-line interface for resolving and printing configuration.
//!
//! The binary loads a configuration file, layers any setting flags given on
//! the command line over it, and prints the resolved values through
//! [`output`].

use std::io;

use buildconf::config::DEFAULT_SECTION;
use buildconf::{ConfigError, Configuration, SettingLayer};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod output;

/// Configuration file read when `--conf-file` is not given.
pub const DEFAULT_CONF_FILE: &str = "/etc/buildconf.conf";

/// Resolve build-orchestration client settings.
#[derive(Debug, Parser)]
#[command(name = "buildconf", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file to read.
    #[arg(long, short = 'c', default_value = DEFAULT_CONF_FILE)]
    pub conf_file: Utf8PathBuf,

    /// Instance section to resolve.
    #[arg(long, short = 'i', default_value = DEFAULT_SECTION)]
    pub instance: String,

    /// Print JSON instead of `key = value` lines.
    #[arg(long)]
    pub json: bool,

    /// Log which tier supplied each setting (sets log level to DEBUG).
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Setting overrides.
    #[command(flatten)]
    pub settings: SettingLayer,
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` always applies; `--debug` adds DEBUG, otherwise WARN.
fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    if tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("log subscriber already installed");
    }
}

/// Parses arguments, resolves every setting and prints the result.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the configuration or a token file cannot
/// be read, [`ConfigError::Parse`] for malformed INI and
/// [`ConfigError::Validation`] for malformed values.
pub fn run() -> Result<(), ConfigError> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Configuration::load(&cli.conf_file)?
        .with_section(cli.instance)
        .with_cli_args(cli.settings);
    let settings = config.resolve_all()?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        output::write_json(&mut stdout, &settings)
    } else {
        output::write_text(&mut stdout, &settings)
    }
}
