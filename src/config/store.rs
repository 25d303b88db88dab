//! INI-backed configuration store.
//!
//! The store is read once and never mutated. Section and key names are
//! normalised to lowercase, values are trimmed, and keys written without a
//! value are dropped so that lookups only ever see real values.
//!
//! Only whole lines starting with `#` or `;` are comments. Those characters
//! inside a value are kept.

use std::collections::{BTreeMap, HashMap};

use camino::Utf8Path;
use configparser::ini::Ini;

use super::error::ConfigError;
use super::fs;

type Section = BTreeMap<String, String>;

const COMMENT_PREFIXES: [char; 2] = ['#', ';'];

/// Sections of key-value pairs loaded from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    sections: BTreeMap<String, Section>,
}

impl ConfigStore {
    /// Loads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid INI.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let store = Self::parse(&content).map_err(|message| ConfigError::Parse {
            path: path.to_owned(),
            message,
        })?;
        tracing::info!(
            path = %path,
            sections = store.sections.len(),
            "loaded configuration file"
        );
        Ok(store)
    }

    /// Parses INI text.
    ///
    /// Indented continuation lines extend the preceding value.
    ///
    /// # Errors
    ///
    /// Returns the parser diagnostic when the text is not valid INI or when
    /// a key appears before the first section header.
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut ini = Ini::new();
        ini.set_multiline(true);
        ini.set_comment_symbols(&[]);
        let raw = ini.read(strip_comment_lines(content)?)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: HashMap<String, HashMap<String, Option<String>>>) -> Self {
        let sections = raw
            .into_iter()
            .map(|(name, entries)| {
                let values = entries
                    .into_iter()
                    .filter_map(|(key, value)| {
                        value.map(|present| (key, present.trim().to_owned()))
                    })
                    .collect();
                (name, values)
            })
            .collect();
        Self { sections }
    }

    /// Returns the value of `key` in `section`, if present.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(&section.to_ascii_lowercase())
            .and_then(|values| values.get(&key.to_ascii_lowercase()))
            .map(String::as_str)
    }

    /// Returns true when the file declared `section`.
    #[must_use]
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(&section.to_ascii_lowercase())
    }

    /// Iterates over section names in sorted order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

/// Drops comment lines and rejects content preceding the first header.
fn strip_comment_lines(content: &str) -> Result<String, String> {
    let mut kept = String::with_capacity(content.len());
    let mut in_section = false;
    for (number, line) in (1..).zip(content.lines()) {
        let trimmed = line.trim();
        if trimmed.starts_with(COMMENT_PREFIXES) {
            continue;
        }
        if trimmed.starts_with('[') {
            in_section = true;
        } else if !trimmed.is_empty() && !in_section {
            return Err(format!(
                "line {number}: file contains no section header before {trimmed:?}"
            ));
        }
        kept.push_str(line);
        kept.push('\n');
    }
    Ok(kept)
}
