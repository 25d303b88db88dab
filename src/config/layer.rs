//! Optional-value layer used for CLI arguments and keyword overrides.
//!
//! Every recognised setting has one optional field. `None` means the layer
//! does not supply the setting and resolution falls through to the next
//! tier.

use camino::Utf8PathBuf;
use clap::Args;

/// One precedence tier of explicitly supplied settings.
///
/// Derives [`clap::Args`] so the binary can flatten it into its parser; the
/// same struct carries programmatic keyword overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct SettingLayer {
    /// OAuth2 token used to authenticate against the cluster.
    #[arg(long)]
    pub token: Option<String>,

    /// File whose contents are the OAuth2 token.
    #[arg(long)]
    pub token_file: Option<Utf8PathBuf>,

    /// Base URI of the cluster API.
    #[arg(long)]
    pub openshift_url: Option<String>,

    /// Namespace builds are created in.
    #[arg(long)]
    pub namespace: Option<String>,

    /// Username for basic authentication.
    #[arg(long)]
    pub username: Option<String>,

    /// Password for basic authentication.
    #[arg(long)]
    pub password: Option<String>,

    /// Whether to authenticate with Kerberos.
    #[arg(long, value_name = "BOOL")]
    pub use_kerberos: Option<bool>,

    /// Kerberos keytab path, e.g. `FILE:/etc/krb5.keytab`.
    #[arg(long)]
    pub kerberos_keytab: Option<String>,

    /// Kerberos principal to authenticate as.
    #[arg(long)]
    pub kerberos_principal: Option<String>,

    /// Kerberos credential cache.
    #[arg(long)]
    pub kerberos_ccache: Option<String>,

    /// Whether to verify TLS certificates.
    #[arg(long, value_name = "BOOL")]
    pub verify_ssl: Option<bool>,

    /// Whether to authenticate at all.
    #[arg(long, value_name = "BOOL")]
    pub use_auth: Option<bool>,

    /// Verbose client output.
    #[arg(long, value_name = "BOOL")]
    pub verbose: Option<bool>,

    /// Directory containing build JSON templates.
    #[arg(long)]
    pub build_json_dir: Option<String>,

    /// Only tag images with unique tags.
    #[arg(long, value_name = "BOOL")]
    pub unique_tag_only: Option<bool>,

    /// Whether this instance may orchestrate worker builds.
    #[arg(long, value_name = "BOOL")]
    pub can_orchestrate: Option<bool>,

    /// Secret holding the client configuration for worker clusters.
    #[arg(long)]
    pub client_config_secret: Option<String>,

    /// Whitespace-separated `name` or `name:path` token secret entries.
    #[arg(long)]
    pub token_secrets: Option<String>,

    /// Config map holding the reactor configuration.
    #[arg(long)]
    pub reactor_config_map: Option<String>,

    /// Build arrangement version.
    #[arg(long)]
    pub arrangement_version: Option<u32>,

    /// SMTP server used for notifications.
    #[arg(long)]
    pub smtp_host: Option<String>,

    /// Sender address for notifications.
    #[arg(long)]
    pub smtp_from: Option<String>,

    /// Notify the build submitter.
    #[arg(long, value_name = "BOOL")]
    pub smtp_to_submitter: Option<bool>,

    /// Notify the package owner.
    #[arg(long, value_name = "BOOL")]
    pub smtp_to_pkgowner: Option<bool>,

    /// Comma-separated addresses that always receive notifications.
    #[arg(long)]
    pub smtp_additional_addresses: Option<String>,

    /// Comma-separated addresses notified on errors.
    #[arg(long)]
    pub smtp_error_addresses: Option<String>,

    /// Comma-separated domains artifacts may be fetched from.
    #[arg(long)]
    pub artifacts_allowed_domains: Option<String>,
}
