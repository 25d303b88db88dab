//! String parsers for list, key:value, boolean and integer settings.

use std::collections::BTreeMap;

use super::error::ConfigError;

/// Mapping from secret name to an optional path holding its material.
pub type TokenSecrets = BTreeMap<String, Option<String>>;

/// Parses whitespace-separated `name` or `name:path` entries.
///
/// Only the first colon separates the name from the path, so paths may
/// contain further colons. Entries without a colon map to `None`.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] when an entry's path is empty or made
/// up only of `/` characters.
pub fn parse_token_secrets(value: &str) -> Result<TokenSecrets, ConfigError> {
    let mut secrets = TokenSecrets::new();

    for entry in value.split_whitespace() {
        match entry.split_once(':') {
            Some((name, path)) => {
                if path.trim_end_matches('/').is_empty() {
                    return Err(ConfigError::validation(format!(
                        "token secret '{name}' has an empty path"
                    )));
                }
                secrets.insert(name.to_owned(), Some(path.to_owned()));
            }
            None => {
                secrets.insert(entry.to_owned(), None);
            }
        }
    }

    Ok(secrets)
}

/// Splits a comma-separated value, trimming whitespace and dropping empty
/// segments.
#[must_use]
pub fn parse_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Parses a boolean setting value.
///
/// Accepts `1`, `yes`, `true`, `on` and `0`, `no`, `false`, `off`, ignoring
/// case and surrounding whitespace.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] for any other value.
pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::validation(format!(
            "invalid boolean '{value}' for '{key}'"
        ))),
    }
}

/// Parses a base-10 unsigned integer setting value.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] when the value is not an integer.
pub fn parse_u32(key: &str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|error| ConfigError::validation(format!("invalid {key} '{value}': {error}")))
}
