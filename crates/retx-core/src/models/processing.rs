//! Request and status models for the returns processing service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::ProcessingConfig;
use crate::error::RequestError;

/// How the processing service should match CSV rows to catalog products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessType {
    /// Match on product id.
    #[default]
    ProductId,
    /// Match on product SKU.
    ProductSku,
    /// Match on the product id embedded in the order permalink.
    ProductIdOnOrderPermalink,
}

impl ProcessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductId => "PRODUCT_ID",
            Self::ProductSku => "PRODUCT_SKU",
            Self::ProductIdOnOrderPermalink => "PRODUCT_ID_ON_ORDER_PERMALINK",
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "PRODUCT_ID" => Ok(Self::ProductId),
            "PRODUCT_SKU" => Ok(Self::ProductSku),
            "PRODUCT_ID_ON_ORDER_PERMALINK" => Ok(Self::ProductIdOnOrderPermalink),
            other => Err(format!("unknown process type: {}", other)),
        }
    }
}

/// Reason written to the `return_reason` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnReason {
    #[default]
    Unknown,
    Small,
    Big,
}

impl ReturnReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Small => "SMALL",
            Self::Big => "BIG",
        }
    }
}

/// Language of the completion e-mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLocale {
    Pt,
    En,
    Es,
}

/// Who gets told when processing finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub recipient_email: String,
    pub recipient_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<NotificationLocale>,
}

/// Payload that asks the processing service to work on an uploaded CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessCsvParams {
    /// Key the CSV was uploaded under.
    pub returns_file_key: String,

    /// Store domain the returns belong to.
    pub domain: String,

    pub process_type: ProcessType,

    /// Ignore the `size_ordered` column when matching.
    pub ignore_ordered_size: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl ProcessCsvParams {
    /// Build a request for `file_key` from the processing settings.
    ///
    /// The file key and domain must be non-blank. When notifications are
    /// enabled both recipient fields must be filled in as well.
    pub fn from_config(
        file_key: &str,
        config: &ProcessingConfig,
    ) -> Result<Self, RequestError> {
        let file_key = file_key.trim();
        if file_key.is_empty() {
            return Err(RequestError::MissingField("returnsFileKey".to_string()));
        }

        let domain = config.domain.trim();
        if domain.is_empty() {
            return Err(RequestError::MissingField("domain".to_string()));
        }

        let notification = if config.notification.enabled {
            let email = config.notification.recipient_email.trim();
            let name = config.notification.recipient_name.trim();
            if email.is_empty() {
                return Err(RequestError::MissingField("recipientEmail".to_string()));
            }
            if name.is_empty() {
                return Err(RequestError::MissingField("recipientName".to_string()));
            }
            Some(Notification {
                recipient_email: email.to_string(),
                recipient_name: name.to_string(),
                locale: config.notification.locale,
            })
        } else {
            None
        };

        Ok(Self {
            returns_file_key: file_key.to_string(),
            domain: domain.to_string(),
            process_type: config.process_type,
            ignore_ordered_size: config.ignore_ordered_size,
            notification,
        })
    }
}

/// Status report for one processing run, as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStatus {
    pub processing_id: String,
    pub status: String,
    pub execution_date: String,
    pub domain: String,
    pub input_file_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<ProcessingStats>,
}

impl ProcessingStatus {
    /// Whether the run has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.to_uppercase().as_str(),
            "COMPLETED" | "SUCCESS" | "FAILED" | "ERROR"
        )
    }

    /// Whether the run ended in failure.
    pub fn is_failed(&self) -> bool {
        self.error_message.is_some()
            || matches!(self.status.to_uppercase().as_str(), "FAILED" | "ERROR")
    }
}

/// Row counters for a processing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStats {
    pub total_processed: u64,
    pub total_created: u64,
    pub total_errors: u64,
    pub success_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors_by_type: Option<Vec<ErrorTypeCount>>,
}

impl ProcessingStats {
    /// Success rate as a percentage, whether the service reports 0-1 or 0-100.
    pub fn success_percent(&self) -> f64 {
        if self.success_rate <= 1.0 {
            self.success_rate * 100.0
        } else {
            self.success_rate
        }
    }
}

/// Error count for one error code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTypeCount {
    pub code: String,
    pub count: u64,
}
