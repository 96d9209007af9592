//! Mount-time configuration.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Error building a [`ComboboxConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("combobox id must not be empty")]
    MissingId,
    #[error("invalid combobox configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Options recognized by a combobox.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use combobox::ComboboxConfig;
///
/// let config = ComboboxConfig::new("court")
///     .aria_label("Gericht")
///     .manual_entry(true)
///     .debounce(Duration::from_millis(300));
///
/// let parsed = ComboboxConfig::from_json(r#"{"id": "court", "noClear": true}"#).unwrap();
/// assert!(parsed.no_clear);
/// # let _ = config;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboboxConfig {
    /// Identifier of the text field.
    pub id: String,
    /// Accessible label of the text field.
    #[serde(default)]
    pub aria_label: String,
    /// Offer a create-new row for text matching no item.
    #[serde(default)]
    pub manual_entry: bool,
    /// Hide the clear control.
    #[serde(default)]
    pub no_clear: bool,
    /// Delay before a keystroke fetch is issued. `None` fetches immediately.
    #[serde(default, rename = "debounceMs", deserialize_with = "millis")]
    pub debounce: Option<Duration>,
}

fn millis<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let ms: Option<u64> = Option::deserialize(deserializer)?;
    Ok(ms.map(Duration::from_millis))
}

impl ComboboxConfig {
    /// Create a configuration with defaults for everything but the id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            aria_label: String::new(),
            manual_entry: false,
            no_clear: false,
            debounce: None,
        }
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::MissingId);
        }
        Ok(())
    }

    /// Sets the accessible label.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = label.into();
        self
    }

    /// Enables or disables the create-new row.
    pub fn manual_entry(mut self, enabled: bool) -> Self {
        self.manual_entry = enabled;
        self
    }

    /// Hides or shows the clear control.
    pub fn no_clear(mut self, hidden: bool) -> Self {
        self.no_clear = hidden;
        self
    }

    /// Sets the keystroke debounce interval.
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = Some(delay);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComboboxConfig::from_json(r#"{"id": "court"}"#).unwrap();
        assert_eq!(config, ComboboxConfig::new("court"));
    }

    #[test]
    fn test_debounce_in_millis() {
        let config = ComboboxConfig::from_json(r#"{"id": "x", "debounceMs": 250}"#).unwrap();
        assert_eq!(config.debounce, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = ComboboxConfig::from_json(r#"{"id": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingId));
    }

    #[test]
    fn test_malformed_json() {
        let err = ComboboxConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
