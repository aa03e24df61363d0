//! Settings: a flat map of dotted configuration keys.
//!
//! Settings are read once at service start and are immutable afterwards.
//! Nested JSON objects are flattened, so `{"lookup": {"locator": {"hostname": "…"}}}`
//! and `{"lookup.locator.hostname": "…"}` are equivalent.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Key holding the endpoint URI of [`StaticLocator`](crate::StaticLocator).
pub const LOCATOR_HOSTNAME_KEY: &str = "lookup.locator.hostname";

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing setting: {0}")]
    Missing(String),

    #[error("settings must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("setting {key} has unsupported value type {found}")]
    UnsupportedValue { key: String, found: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable string settings keyed by dotted names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Parse settings from a JSON object.
    ///
    /// Strings, numbers and booleans become string values. `null` leaves are
    /// skipped. Arrays are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        let map = match value {
            Value::Object(map) => map,
            other => return Err(ConfigError::NotAnObject(json_type(&other))),
        };

        let mut values = BTreeMap::new();
        for (key, value) in map {
            flatten(key, value, &mut values)?;
        }
        Ok(Self { values })
    }

    /// Read settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a setting that must be present.
    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builder for [`Settings`].
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    values: BTreeMap<String, String>,
}

impl SettingsBuilder {
    /// Set a value, replacing any previous one.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Settings {
        Settings {
            values: self.values,
        }
    }
}

fn flatten(
    key: String,
    value: Value,
    out: &mut BTreeMap<String, String>,
) -> Result<(), ConfigError> {
    match value {
        Value::Null => {}
        Value::String(s) => {
            out.insert(key, s);
        }
        Value::Number(n) => {
            out.insert(key, n.to_string());
        }
        Value::Bool(b) => {
            out.insert(key, b.to_string());
        }
        Value::Object(map) => {
            for (child, value) in map {
                flatten(format!("{}.{}", key, child), value, out)?;
            }
        }
        Value::Array(_) => {
            return Err(ConfigError::UnsupportedValue {
                key,
                found: "array",
            })
        }
    }
    Ok(())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
