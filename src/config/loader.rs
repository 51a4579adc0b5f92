//! Parameter and defaults file loading.
//!
//! Files ending in `.toml` are parsed as TOML and converted to JSON values;
//! anything else is parsed as JSON.

use serde_json::Value;
use std::fs;
use std::path::Path;

/// Errors loading a settings document
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Read a JSON or TOML document into a JSON value.
pub fn load_document(path: &Path) -> Result<Value, ConfigError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let value = if is_toml {
        let table: toml::Value = toml::from_str(&contents).map_err(|e| {
            ConfigError::ParseError(format!("{}: TOML parse error: {}", path.display(), e))
        })?;
        toml_to_json(table)
    } else {
        serde_json::from_str(&contents).map_err(|e| {
            ConfigError::ParseError(format!("{}: JSON parse error: {}", path.display(), e))
        })?
    };

    tracing::debug!(path = %path.display(), toml = is_toml, "loaded settings document");
    Ok(value)
}

fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => s.into(),
        toml::Value::Integer(i) => i.into(),
        // Non-finite floats have no JSON form and become null.
        toml::Value::Float(f) => f.into(),
        toml::Value::Boolean(b) => b.into(),
        toml::Value::Datetime(dt) => dt.to_string().into(),
        toml::Value::Array(items) => items.into_iter().map(toml_to_json).collect(),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}
