//! Configuration structures for returns CSV preparation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::processing::{NotificationLocale, ProcessType};
use super::product::ProductFieldType;
use crate::error::{Result, RetxError};

/// Main configuration for retx.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetxConfig {
    /// CSV generation configuration.
    pub generator: GeneratorConfig,

    /// Processing request configuration.
    pub processing: ProcessingConfig,
}

/// CSV generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Label of the product identifier column.
    pub field_type: ProductFieldType,

    /// Directory generated CSV files are written to.
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            field_type: ProductFieldType::ProductSku,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Settings used to build processing requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Store domain, e.g. `shop.example.com`.
    pub domain: String,

    /// How rows are matched to catalog products.
    pub process_type: ProcessType,

    /// Ignore ordered size when matching.
    pub ignore_ordered_size: bool,

    /// Completion e-mail settings.
    pub notification: NotificationConfig,
}

/// Completion e-mail settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Send a completion e-mail.
    pub enabled: bool,

    pub recipient_email: String,

    pub recipient_name: String,

    /// E-mail language (service default when unset).
    pub locale: Option<NotificationLocale>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            recipient_email: String::new(),
            recipient_name: String::new(),
            locale: None,
        }
    }
}

impl RetxConfig {
    /// Load configuration from a JSON file.
    ///
    /// A file that is not a valid configuration is a [`RetxError::Config`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            warn!("Rejected config {}: {}", path.display(), e);
            RetxError::Config(format!("{}: {}", path.display(), e))
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = RetxConfig::default();
        assert_eq!(config.generator.field_type, ProductFieldType::ProductSku);
        assert_eq!(config.processing.process_type, ProcessType::ProductId);
        assert!(config.processing.notification.enabled);
        assert!(!config.processing.ignore_ordered_size);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: RetxConfig =
            serde_json::from_str(r#"{ "processing": { "domain": "shop.example.com" } }"#).unwrap();
        assert_eq!(config.processing.domain, "shop.example.com");
        assert_eq!(config.generator, GeneratorConfig::default());
        assert!(config.processing.notification.enabled);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = RetxConfig::default();
        config.generator.field_type = ProductFieldType::ProductUrl;
        config.processing.notification.locale = Some(NotificationLocale::Pt);
        config.save(&path).unwrap();

        let loaded = RetxConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "processing": { "process_type": "by_color" } }"#).unwrap();

        let err = RetxConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, RetxError::Config(_)));
        assert!(err.to_string().starts_with("configuration error:"));
    }
}
