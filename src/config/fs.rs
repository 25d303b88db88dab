//! Capability-scoped file reads for configuration and token files.

use std::io;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Opens the directory containing `path`, treating a bare file name as
/// relative to the working directory.
fn open_parent(path: &Utf8Path) -> io::Result<Dir> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Dir::open_ambient_dir(parent, ambient_authority())
}

/// Reads the whole file at `path` as UTF-8.
///
/// # Errors
///
/// Returns the underlying I/O error when the directory or file cannot be
/// opened or read.
pub(crate) fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path '{path}' has no file name"),
        )
    })?;
    open_parent(path)?.read_to_string(file_name)
}

/// Returns true when `path` names an existing regular file.
pub(crate) fn is_file(path: &Utf8Path) -> bool {
    let Some(file_name) = path.file_name() else {
        return false;
    };
    open_parent(path)
        .and_then(|dir| dir.metadata(file_name))
        .is_ok_and(|metadata| metadata.is_file())
}
