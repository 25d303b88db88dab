//! Output formatting for resolved settings.

use std::io::{self, Write};

use buildconf::{ConfigError, ResolvedSettings};
use serde_json::Value;

/// Writes the settings as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when serialisation or the write fails.
pub fn write_json<W: Write>(writer: &mut W, settings: &ResolvedSettings) -> Result<(), ConfigError> {
    serde_json::to_writer_pretty(&mut *writer, settings).map_err(io::Error::from)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes one `key = value` line per configured setting.
///
/// Unset settings are omitted.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when serialisation or the write fails.
pub fn write_text<W: Write>(writer: &mut W, settings: &ResolvedSettings) -> Result<(), ConfigError> {
    let Value::Object(fields) = serde_json::to_value(settings).map_err(io::Error::from)? else {
        return Ok(());
    };

    for (key, value) in &fields {
        if let Some(rendered) = render_value(value) {
            writeln!(writer, "{key} = {rendered}")?;
        }
    }
    Ok(())
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(render_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(entries) => Some(
            entries
                .iter()
                .map(|(name, path)| match path.as_str() {
                    Some(path_value) => format!("{name}:{path_value}"),
                    None => name.clone(),
                })
                .collect::<Vec<_>>()
                .join(" "),
        ),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
    }
}
