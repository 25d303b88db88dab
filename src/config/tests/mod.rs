//! Unit tests for configuration resolution.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared fixture for configuration and token files
//! - `token_resolution`: OAuth2 token precedence and locator fallback
//! - `precedence`: Keyword, CLI and file precedence for single values
//! - `token_secrets`: `token_secrets` parsing through the resolver
//! - `build_json_store`: Builder build JSON directory fallback
//! - `arrangement_version`: Integer parsing and default
//! - `address_lists`: Comma-separated list settings
//! - `typed_settings`: Boolean flags, defaults and instance sections
//! - `snapshot`: `resolve_all` output

mod build_json_store;
mod helpers;
mod token_secrets;
