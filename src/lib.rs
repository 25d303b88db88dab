//! Buildconf library crate providing layered configuration resolution.
//!
//! The library loads an INI configuration file, combines it with
//! command-line arguments and keyword overrides in a fixed precedence order,
//! and exposes one getter per client setting. Parsing failures surface as
//! [`ConfigError::Validation`] so callers can report them.

pub mod config;

pub use config::{
    ConfigError, ConfigStore, Configuration, InstanceTokenFileLocator, NoTokenFileLocator,
    ResolvedSettings, SettingLayer, SettingSource, TokenFileLocator, TokenSecrets,
};
