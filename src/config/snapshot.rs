//! Serialisable snapshot of every resolved setting.

use serde::Serialize;

use super::parse::TokenSecrets;

/// All settings resolved for one instance section.
///
/// Produced by [`Configuration::resolve_all`](super::Configuration::resolve_all).
/// The password and OAuth2 token are reported only as presence flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSettings {
    /// Instance section the values were read from.
    pub section: String,
    /// Cluster API base URI.
    pub openshift_url: String,
    /// Build namespace.
    pub namespace: String,
    /// Basic-auth username.
    pub username: Option<String>,
    /// Whether a basic-auth password is configured.
    pub has_password: bool,
    /// Whether an OAuth2 token could be resolved.
    pub has_oauth2_token: bool,
    /// Kerberos authentication flag.
    pub use_kerberos: bool,
    /// Kerberos keytab.
    pub kerberos_keytab: Option<String>,
    /// Kerberos principal.
    pub kerberos_principal: Option<String>,
    /// Kerberos credential cache.
    pub kerberos_ccache: Option<String>,
    /// TLS verification flag.
    pub verify_ssl: bool,
    /// Authentication flag.
    pub use_auth: bool,
    /// Client verbosity.
    pub verbose: bool,
    /// Build JSON directory from the `general` section.
    pub build_json_dir: Option<String>,
    /// Build JSON directory for builder images.
    pub builder_build_json_dir: Option<String>,
    /// Unique-tag-only flag.
    pub unique_tag_only: bool,
    /// Orchestration flag.
    pub can_orchestrate: bool,
    /// Client configuration secret name.
    pub client_config_secret: Option<String>,
    /// Parsed token secrets.
    pub token_secrets: Option<TokenSecrets>,
    /// Reactor configuration map name.
    pub reactor_config_map: Option<String>,
    /// Build arrangement version.
    pub arrangement_version: u32,
    /// SMTP server.
    pub smtp_host: Option<String>,
    /// Notification sender.
    pub smtp_from: Option<String>,
    /// Notify the submitter.
    pub smtp_to_submitter: bool,
    /// Notify the package owner.
    pub smtp_to_pkgowner: bool,
    /// Additional notification recipients.
    pub smtp_additional_addresses: Vec<String>,
    /// Recipients of error notifications.
    pub smtp_error_addresses: Vec<String>,
    /// Allowed artifact domains.
    pub artifacts_allowed_domains: Vec<String>,
}
