//! Layered configuration resolution for the build-orchestration client.
//!
//! A [`Configuration`] combines three immutable layers and answers one
//! query per setting.
//!
//! # Precedence
//!
//! Values are resolved with the following precedence (highest first):
//!
//! 1. **Keyword overrides** – a [`SettingLayer`] supplied by the caller
//! 2. **Command-line arguments** – a [`SettingLayer`] parsed by the binary
//! 3. **Configuration file** – the instance section (`default` unless
//!    changed with [`Configuration::with_section`]), or `general` for the
//!    handful of settings that live there
//! 4. **Fallback** – a built-in default, or for the OAuth2 token the
//!    [`TokenFileLocator`]
//!
//! # Configuration File
//!
//! ```ini
//! [general]
//! build_json_dir = /usr/share/build-json
//! verbose = false
//!
//! [default]
//! openshift_url = https://openshift.example.com/
//! namespace = builds
//! token_file = /etc/buildconf/token
//! token_secrets = registry:/var/run/secrets/registry
//! smtp_error_addresses = ops@example.com, builds@example.com
//! arrangement_version = 4
//! ```

mod error;
mod fs;
mod layer;
mod locator;
mod parse;
mod snapshot;
mod store;

use std::fmt;

use camino::Utf8Path;

pub use error::ConfigError;
pub use layer::SettingLayer;
pub use locator::{InstanceTokenFileLocator, NoTokenFileLocator, TokenFileLocator};
pub use parse::{TokenSecrets, parse_bool, parse_comma_list, parse_token_secrets, parse_u32};
pub use snapshot::ResolvedSettings;
pub use store::ConfigStore;

/// Section read when no instance section is configured.
pub const DEFAULT_SECTION: &str = "default";

/// Section holding settings shared by every instance.
pub const GENERAL_SECTION: &str = "general";

/// Arrangement version used when none is configured.
pub const DEFAULT_ARRANGEMENT_VERSION: u32 = 4;

/// Cluster API base URI used when none is configured.
pub const DEFAULT_OPENSHIFT_URL: &str = "https://localhost:8443/";

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "default";

/// The precedence tier that supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    /// A keyword override passed by the caller.
    Keyword,
    /// A command-line argument.
    Cli,
    /// The configuration file.
    ConfigFile,
    /// A built-in default or the token-file locator.
    Fallback,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Keyword => "keyword",
            Self::Cli => "cli",
            Self::ConfigFile => "config file",
            Self::Fallback => "fallback",
        };
        f.write_str(label)
    }
}

type StringField = fn(&SettingLayer) -> Option<&String>;
type BoolField = fn(&SettingLayer) -> Option<bool>;

fn log_resolution(key: &str, source: SettingSource) {
    tracing::debug!(setting = key, source = %source, "resolved setting");
}

/// Resolves effective settings from keyword, CLI and file layers.
///
/// Construction reads the configuration file once; every getter afterwards
/// is evaluated on demand without caching.
///
/// # Example
///
/// ```no_run
/// use buildconf::{Configuration, SettingLayer};
/// use camino::Utf8Path;
///
/// let overrides = SettingLayer {
///     namespace: Some("scratch".to_owned()),
///     ..Default::default()
/// };
/// let config = Configuration::load(Utf8Path::new("/etc/buildconf.conf"))
///     .expect("config file should load")
///     .with_overrides(overrides);
///
/// assert_eq!(config.get_namespace(), "scratch");
/// ```
pub struct Configuration {
    store: ConfigStore,
    section: String,
    cli: SettingLayer,
    overrides: SettingLayer,
    locator: Box<dyn TokenFileLocator>,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("store", &self.store)
            .field("section", &self.section)
            .finish_non_exhaustive()
    }
}

impl Configuration {
    /// Loads the configuration file at `conf_file` with empty CLI and
    /// keyword layers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid INI.
    pub fn load(conf_file: &Utf8Path) -> Result<Self, ConfigError> {
        ConfigStore::load(conf_file).map(Self::from_store)
    }

    /// Loads `conf_file` and installs the optional CLI layer and the keyword
    /// overrides in one step.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Configuration::load`].
    pub fn new(
        conf_file: &Utf8Path,
        cli_args: Option<SettingLayer>,
        overrides: SettingLayer,
    ) -> Result<Self, ConfigError> {
        let config = Self::load(conf_file)?.with_overrides(overrides);
        Ok(match cli_args {
            Some(cli) => config.with_cli_args(cli),
            None => config,
        })
    }

    /// Wraps an already parsed store.
    #[must_use]
    pub fn from_store(store: ConfigStore) -> Self {
        Self {
            store,
            section: DEFAULT_SECTION.to_owned(),
            cli: SettingLayer::default(),
            overrides: SettingLayer::default(),
            locator: Box::new(InstanceTokenFileLocator::from_env()),
        }
    }

    /// Selects the instance section read for per-instance settings.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Installs the command-line layer.
    #[must_use]
    pub fn with_cli_args(mut self, cli: SettingLayer) -> Self {
        self.cli = cli;
        self
    }

    /// Installs the keyword override layer.
    #[must_use]
    pub fn with_overrides(mut self, overrides: SettingLayer) -> Self {
        self.overrides = overrides;
        self
    }

    /// Replaces the token-file locator consulted as the last token tier.
    #[must_use]
    pub fn with_token_locator(mut self, locator: impl TokenFileLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// Returns the instance section name.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Returns the underlying configuration store.
    #[must_use]
    pub const fn store(&self) -> &ConfigStore {
        &self.store
    }

    fn layered<'a, T>(
        &'a self,
        pick: impl Fn(&'a SettingLayer) -> Option<T>,
    ) -> Option<(T, SettingSource)> {
        pick(&self.overrides)
            .map(|value| (value, SettingSource::Keyword))
            .or_else(|| pick(&self.cli).map(|value| (value, SettingSource::Cli)))
    }

    fn string_in(&self, section: &str, key: &str, pick: StringField) -> Option<String> {
        let (value, source) = self
            .layered(|layer| pick(layer).map(String::as_str))
            .or_else(|| {
                self.store
                    .get(section, key)
                    .map(|value| (value, SettingSource::ConfigFile))
            })?;
        log_resolution(key, source);
        Some(value.to_owned())
    }

    fn string(&self, key: &str, pick: StringField) -> Option<String> {
        self.string_in(&self.section, key, pick)
    }

    fn string_or(&self, key: &str, pick: StringField, default: &str) -> String {
        self.string(key, pick).unwrap_or_else(|| {
            log_resolution(key, SettingSource::Fallback);
            default.to_owned()
        })
    }

    fn bool_in(
        &self,
        section: &str,
        key: &str,
        pick: BoolField,
        default: bool,
    ) -> Result<bool, ConfigError> {
        if let Some((value, source)) = self.layered(pick) {
            log_resolution(key, source);
            return Ok(value);
        }
        match self.store.get(section, key) {
            Some(raw) => {
                let value = parse_bool(key, raw)?;
                log_resolution(key, SettingSource::ConfigFile);
                Ok(value)
            }
            None => {
                log_resolution(key, SettingSource::Fallback);
                Ok(default)
            }
        }
    }

    fn bool(&self, key: &str, pick: BoolField, default: bool) -> Result<bool, ConfigError> {
        self.bool_in(&self.section, key, pick, default)
    }

    fn list(&self, key: &str, pick: StringField) -> Vec<String> {
        self.string(key, pick)
            .map(|raw| parse_comma_list(&raw))
            .unwrap_or_default()
    }

    /// Resolves the OAuth2 token.
    ///
    /// Each tier (keyword, CLI, config file) is checked for a direct token
    /// and then a token file before moving to the next tier. When no tier
    /// supplies either, the token-file locator is asked for a file belonging
    /// to the instance section. Token files are returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when a selected token file cannot be read.
    pub fn get_oauth2_token(&self) -> Result<Option<String>, ConfigError> {
        for (layer, source) in [
            (&self.overrides, SettingSource::Keyword),
            (&self.cli, SettingSource::Cli),
        ] {
            if let Some(token) = &layer.token {
                log_resolution("token", source);
                return Ok(Some(token.clone()));
            }
            if let Some(token_file) = &layer.token_file {
                log_resolution("token_file", source);
                return read_token_file(token_file).map(Some);
            }
        }

        if let Some(token) = self.store.get(&self.section, "token") {
            log_resolution("token", SettingSource::ConfigFile);
            return Ok(Some(token.to_owned()));
        }
        if let Some(token_file) = self.store.get(&self.section, "token_file") {
            log_resolution("token_file", SettingSource::ConfigFile);
            return read_token_file(Utf8Path::new(token_file)).map(Some);
        }

        match self.locator.token_file_for(&self.section) {
            Some(token_file) => {
                tracing::debug!(
                    section = %self.section,
                    path = %token_file,
                    "using instance token file"
                );
                read_token_file(&token_file).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Returns the cluster API base URI.
    #[must_use]
    pub fn get_openshift_base_uri(&self) -> String {
        self.string_or(
            "openshift_url",
            |layer| layer.openshift_url.as_ref(),
            DEFAULT_OPENSHIFT_URL,
        )
    }

    /// Returns the namespace builds are created in.
    #[must_use]
    pub fn get_namespace(&self) -> String {
        self.string_or(
            "namespace",
            |layer| layer.namespace.as_ref(),
            DEFAULT_NAMESPACE,
        )
    }

    /// Returns the basic-auth username.
    #[must_use]
    pub fn get_username(&self) -> Option<String> {
        self.string("username", |layer| layer.username.as_ref())
    }

    /// Returns the basic-auth password.
    #[must_use]
    pub fn get_password(&self) -> Option<String> {
        self.string("password", |layer| layer.password.as_ref())
    }

    /// Returns whether Kerberos authentication is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a non-boolean file value.
    pub fn get_use_kerberos(&self) -> Result<bool, ConfigError> {
        self.bool("use_kerberos", |layer| layer.use_kerberos, false)
    }

    /// Returns the Kerberos keytab.
    #[must_use]
    pub fn get_kerberos_keytab(&self) -> Option<String> {
        self.string("kerberos_keytab", |layer| layer.kerberos_keytab.as_ref())
    }

    /// Returns the Kerberos principal.
    #[must_use]
    pub fn get_kerberos_principal(&self) -> Option<String> {
        self.string("kerberos_principal", |layer| {
            layer.kerberos_principal.as_ref()
        })
    }

    /// Returns the Kerberos credential cache.
    #[must_use]
    pub fn get_kerberos_ccache(&self) -> Option<String> {
        self.string("kerberos_ccache", |layer| layer.kerberos_ccache.as_ref())
    }

    /// Returns whether TLS certificates are verified. Defaults to true.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a non-boolean file value.
    pub fn get_verify_ssl(&self) -> Result<bool, ConfigError> {
        self.bool("verify_ssl", |layer| layer.verify_ssl, true)
    }

    /// Returns whether the client authenticates. Defaults to true.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a non-boolean file value.
    pub fn get_use_auth(&self) -> Result<bool, ConfigError> {
        self.bool("use_auth", |layer| layer.use_auth, true)
    }

    /// Returns the verbosity flag from the `general` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a non-boolean file value.
    pub fn get_verbosity(&self) -> Result<bool, ConfigError> {
        self.bool_in(GENERAL_SECTION, "verbose", |layer| layer.verbose, false)
    }

    /// Returns the build JSON directory from the `general` section.
    #[must_use]
    pub fn get_build_json_store(&self) -> Option<String> {
        self.string_in(GENERAL_SECTION, "build_json_dir", |layer| {
            layer.build_json_dir.as_ref()
        })
    }

    /// Returns the build JSON directory used for builder images.
    ///
    /// Reads `builder_build_json_dir` from the instance section and falls
    /// back to `build_json_dir` in the `general` section. Only the
    /// configuration file is consulted.
    #[must_use]
    pub fn get_builder_build_json_store(&self) -> Option<String> {
        self.store
            .get(&self.section, "builder_build_json_dir")
            .or_else(|| self.store.get(GENERAL_SECTION, "build_json_dir"))
            .map(ToOwned::to_owned)
    }

    /// Returns whether only unique tags are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a non-boolean file value.
    pub fn get_unique_tag_only(&self) -> Result<bool, ConfigError> {
        self.bool("unique_tag_only", |layer| layer.unique_tag_only, false)
    }

    /// Returns whether this instance may orchestrate worker builds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a non-boolean file value.
    pub fn get_can_orchestrate(&self) -> Result<bool, ConfigError> {
        self.bool("can_orchestrate", |layer| layer.can_orchestrate, false)
    }

    /// Returns the client configuration secret name.
    #[must_use]
    pub fn get_client_config_secret(&self) -> Option<String> {
        self.string("client_config_secret", |layer| {
            layer.client_config_secret.as_ref()
        })
    }

    /// Returns the parsed token secrets, or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when an entry has an empty path.
    pub fn get_token_secrets(&self) -> Result<Option<TokenSecrets>, ConfigError> {
        self.string("token_secrets", |layer| layer.token_secrets.as_ref())
            .map(|raw| parse_token_secrets(&raw))
            .transpose()
    }

    /// Returns the reactor configuration map name.
    #[must_use]
    pub fn get_reactor_config_map(&self) -> Option<String> {
        self.string("reactor_config_map", |layer| {
            layer.reactor_config_map.as_ref()
        })
    }

    /// Returns the build arrangement version.
    ///
    /// Falls back to [`DEFAULT_ARRANGEMENT_VERSION`] when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the file value is not an
    /// integer.
    pub fn get_arrangement_version(&self) -> Result<u32, ConfigError> {
        const KEY: &str = "arrangement_version";

        if let Some((version, source)) = self.layered(|layer| layer.arrangement_version) {
            log_resolution(KEY, source);
            return Ok(version);
        }
        match self.store.get(&self.section, KEY) {
            Some(raw) => {
                let version = parse_u32(KEY, raw)?;
                log_resolution(KEY, SettingSource::ConfigFile);
                Ok(version)
            }
            None => {
                log_resolution(KEY, SettingSource::Fallback);
                Ok(DEFAULT_ARRANGEMENT_VERSION)
            }
        }
    }

    /// Returns the SMTP server.
    #[must_use]
    pub fn get_smtp_host(&self) -> Option<String> {
        self.string("smtp_host", |layer| layer.smtp_host.as_ref())
    }

    /// Returns the notification sender address.
    #[must_use]
    pub fn get_smtp_from(&self) -> Option<String> {
        self.string("smtp_from", |layer| layer.smtp_from.as_ref())
    }

    /// Returns whether the submitter is notified.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a non-boolean file value.
    pub fn get_smtp_to_submitter(&self) -> Result<bool, ConfigError> {
        self.bool("smtp_to_submitter", |layer| layer.smtp_to_submitter, false)
    }

    /// Returns whether the package owner is notified.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a non-boolean file value.
    pub fn get_smtp_to_pkgowner(&self) -> Result<bool, ConfigError> {
        self.bool("smtp_to_pkgowner", |layer| layer.smtp_to_pkgowner, false)
    }

    /// Returns addresses that always receive notifications.
    #[must_use]
    pub fn get_smtp_additional_addresses(&self) -> Vec<String> {
        self.list("smtp_additional_addresses", |layer| {
            layer.smtp_additional_addresses.as_ref()
        })
    }

    /// Returns addresses notified when a build fails.
    #[must_use]
    pub fn get_smtp_error_addresses(&self) -> Vec<String> {
        self.list("smtp_error_addresses", |layer| {
            layer.smtp_error_addresses.as_ref()
        })
    }

    /// Returns domains artifacts may be downloaded from.
    #[must_use]
    pub fn get_artifacts_allowed_domains(&self) -> Vec<String> {
        self.list("artifacts_allowed_domains", |layer| {
            layer.artifacts_allowed_domains.as_ref()
        })
    }

    /// Resolves every setting into a snapshot.
    ///
    /// Secrets are reduced to presence flags.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an individual getter.
    pub fn resolve_all(&self) -> Result<ResolvedSettings, ConfigError> {
        Ok(ResolvedSettings {
            section: self.section.clone(),
            openshift_url: self.get_openshift_base_uri(),
            namespace: self.get_namespace(),
            username: self.get_username(),
            has_password: self.get_password().is_some(),
            has_oauth2_token: self.get_oauth2_token()?.is_some(),
            use_kerberos: self.get_use_kerberos()?,
            kerberos_keytab: self.get_kerberos_keytab(),
            kerberos_principal: self.get_kerberos_principal(),
            kerberos_ccache: self.get_kerberos_ccache(),
            verify_ssl: self.get_verify_ssl()?,
            use_auth: self.get_use_auth()?,
            verbose: self.get_verbosity()?,
            build_json_dir: self.get_build_json_store(),
            builder_build_json_dir: self.get_builder_build_json_store(),
            unique_tag_only: self.get_unique_tag_only()?,
            can_orchestrate: self.get_can_orchestrate()?,
            client_config_secret: self.get_client_config_secret(),
            token_secrets: self.get_token_secrets()?,
            reactor_config_map: self.get_reactor_config_map(),
            arrangement_version: self.get_arrangement_version()?,
            smtp_host: self.get_smtp_host(),
            smtp_from: self.get_smtp_from(),
            smtp_to_submitter: self.get_smtp_to_submitter()?,
            smtp_to_pkgowner: self.get_smtp_to_pkgowner()?,
            smtp_additional_addresses: self.get_smtp_additional_addresses(),
            smtp_error_addresses: self.get_smtp_error_addresses(),
            artifacts_allowed_domains: self.get_artifacts_allowed_domains(),
        })
    }
}

fn read_token_file(path: &Utf8Path) -> Result<String, ConfigError> {
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests;
