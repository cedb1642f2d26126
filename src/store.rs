//! Persisted configuration store.
//!
//! Credentials and connection settings can be kept in a sectioned file
//! instead of being passed to every constructor. Sections are named after
//! [`Platform::section`](crate::Platform::section):
//!
//! ```toml
//! [downloads]
//! bearer_token = "abc"
//!
//! [tenable_io]
//! access_key = "..."
//! secret_key = "..."
//! proxy = "http://proxy.internal:3128"
//! verify = "yes"
//!
//! [tenable_sc]
//! host = "sc.example.com"
//! username = "admin"
//! password = "..."
//! ```
//!
//! The store is an explicit value handed to a client through
//! [`ClientConfig::with_config`](crate::ClientConfig::with_config); nothing
//! is read implicitly.

use std::collections::BTreeMap;
use std::path::Path;

use crate::{Error, Result};

/// File name looked up by [`ConfigStore::load_default`].
pub const DEFAULT_CONFIG_FILE: &str = "tenable.toml";

/// A read-only source of sectioned configuration values.
///
/// Implement this to back clients with something other than a
/// [`ConfigStore`] (environment variables, a secrets manager, ...).
pub trait ConfigSource: Send + Sync {
    /// Look up `key` in `section`.
    fn get(&self, section: &str, key: &str) -> Option<String>;

    /// Look up a boolean-like value (`1/yes/true/on`, `0/no/false/off`).
    ///
    /// Returns `Ok(None)` when the key is absent and an error when it is
    /// present but not recognisable as a boolean.
    fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>> {
        match self.get(section, key) {
            None => Ok(None),
            Some(raw) => parse_bool(&raw).map(Some).ok_or_else(|| {
                Error::Config(format!(
                    "[{}] {} is not a boolean: {:?}",
                    section, key, raw
                ))
            }),
        }
    }
}

/// Parse a boolean-like configuration string.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// In-memory sectioned key/value store, usually loaded from a TOML file.
///
/// # Example
///
/// ```
/// use tenable_rs::store::{ConfigSource, ConfigStore};
///
/// let store = ConfigStore::new()
///     .with_value("tenable_sc", "host", "sc.example.com")
///     .with_value("tenable_sc", "verify", "no");
///
/// assert_eq!(store.get("tenable_sc", "host").as_deref(), Some("sc.example.com"));
/// assert_eq!(store.get_bool("tenable_sc", "verify").unwrap(), Some(false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a store from TOML text.
    ///
    /// Every top-level table is a section. Values may be strings, booleans,
    /// integers or floats and are kept as text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = text.parse()?;
        let mut store = Self::new();

        for (section, value) in table {
            let toml::Value::Table(entries) = value else {
                return Err(Error::Config(format!(
                    "top-level key {:?} is not a section",
                    section
                )));
            };

            for (key, value) in entries {
                let text = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Boolean(b) => b.to_string(),
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    other => {
                        return Err(Error::Config(format!(
                            "[{}] {} has unsupported type {}",
                            section,
                            key,
                            other.type_str()
                        )))
                    }
                };
                store.set(&section, key, text);
            }
        }

        Ok(store)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let store = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), sections = store.sections.len(), "Loaded configuration");
        Ok(store)
    }

    /// Read [`DEFAULT_CONFIG_FILE`] from the working directory.
    ///
    /// A missing file yields an empty store.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No {} found, using empty configuration", DEFAULT_CONFIG_FILE);
            return Ok(Self::new());
        }
        Self::load(path)
    }

    /// Set a value, creating the section if needed.
    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with_value(mut self, section: &str, key: &str, value: impl Into<String>) -> Self {
        self.set(section, key, value);
        self
    }

    /// Returns `true` if the section exists.
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }
}

impl ConfigSource for ConfigStore {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        self.sections.get(section)?.get(key).cloned()
    }
}
