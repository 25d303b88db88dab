//! Shared test helpers for configuration tests.

use camino::Utf8PathBuf;
use tempfile::TempDir;

use crate::config::{Configuration, NoTokenFileLocator};

/// Sections written into a fixture configuration file.
pub type Sections<'a> = &'a [(&'a str, &'a [(&'a str, &'a str)])];

/// Temporary directory holding configuration and token files for one test.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        let dir = TempDir::new()
            .unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"));
        Self { dir }
    }

    /// Returns the UTF-8 path of `name` inside the fixture directory.
    pub fn path(&self, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().join(name))
            .unwrap_or_else(|path| panic!("non UTF-8 temp path: {}", path.display()))
    }

    /// Writes `content` to `name` and returns its path.
    pub fn write(&self, name: &str, content: &str) -> Utf8PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content)
            .unwrap_or_else(|error| panic!("failed to write {path}: {error}"));
        path
    }

    /// Writes an INI file built from `sections` and returns its path.
    pub fn config_file(&self, sections: Sections<'_>) -> Utf8PathBuf {
        let mut content = String::new();
        for (section, entries) in sections {
            content.push_str(&format!("\n[{section}]\n"));
            for (key, value) in *entries {
                content.push_str(&format!("{key}={value}\n"));
            }
        }
        self.write("buildconf.conf", &content)
    }

    /// Loads a [`Configuration`] from `sections` without a token locator.
    pub fn configuration(&self, sections: Sections<'_>) -> Configuration {
        let path = self.config_file(sections);
        Configuration::load(&path)
            .unwrap_or_else(|error| panic!("failed to load {path}: {error}"))
            .with_token_locator(NoTokenFileLocator)
    }
}
