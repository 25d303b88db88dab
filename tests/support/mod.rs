//! Shared test utilities.

use camino::Utf8PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for configuration fixtures.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Returns the UTF-8 path of `name` inside `dir`.
///
/// # Panics
///
/// Panics if the temporary directory path is not UTF-8.
pub fn utf8_path(dir: &TempDir, name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join(name))
        .unwrap_or_else(|path| panic!("non UTF-8 temp path: {}", path.display()))
}

/// Writes `content` to `name` inside `dir` and returns the path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
    let path = utf8_path(dir, name);
    std::fs::write(&path, content).unwrap_or_else(|error| panic!("failed to write {path}: {error}"));
    path
}

/// Writes an INI configuration file from `(section, entries)` pairs.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_config(dir: &TempDir, sections: &[(&str, &[(&str, &str)])]) -> Utf8PathBuf {
    let mut content = String::new();
    for (section, entries) in sections {
        content.push_str(&format!("[{section}]\n"));
        for (key, value) in *entries {
            content.push_str(&format!("{key} = {value}\n"));
        }
    }
    write_file(dir, "buildconf.conf", &content)
}
