//! Parsed product records and CSV generation results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order id used when none can be found in the input.
pub const UNKNOWN_ORDER_ID: &str = "UNKNOWN";

/// Size used when the input does not name one.
pub const DEFAULT_SIZE: &str = "One Size";

/// Quantity used when the input does not name one.
pub const DEFAULT_QUANTITY: &str = "1";

/// A single product line extracted from order text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProduct {
    /// Order identifier, `UNKNOWN` when not discoverable.
    pub order_id: String,

    /// Order date as `DD/MM/YYYY`, or empty.
    pub order_date: String,

    /// SKU, product id or similar token. Never empty.
    pub product_identifier: String,

    /// Ordered size, `One Size` by default.
    pub size_ordered: String,

    /// Ordered quantity, `1` by default.
    pub quantity: String,
}

impl ParsedProduct {
    /// Create a product with default size and quantity.
    pub fn new(
        order_id: impl Into<String>,
        order_date: impl Into<String>,
        product_identifier: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            order_date: order_date.into(),
            product_identifier: product_identifier.into(),
            size_ordered: DEFAULT_SIZE.to_string(),
            quantity: DEFAULT_QUANTITY.to_string(),
        }
    }

    /// Set the ordered size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size_ordered = size.into();
        self
    }

    /// Set the ordered quantity.
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }
}

/// Label of the product identifier column in the generated CSV.
///
/// Only the header changes; every variant is filled from
/// [`ParsedProduct::product_identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFieldType {
    /// `product_id`
    ProductId,
    /// `product_sku`
    #[default]
    ProductSku,
    /// `product_url`
    ProductUrl,
}

impl ProductFieldType {
    /// Column label written to the CSV header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductId => "product_id",
            Self::ProductSku => "product_sku",
            Self::ProductUrl => "product_url",
        }
    }
}

impl fmt::Display for ProductFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductFieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "product_id" => Ok(Self::ProductId),
            "product_sku" => Ok(Self::ProductSku),
            "product_url" => Ok(Self::ProductUrl),
            other => Err(format!(
                "unknown product field '{}', expected product_id, product_sku or product_url",
                other
            )),
        }
    }
}

/// Output of a CSV generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvGenerationResult {
    /// CSV document, header included, no trailing newline.
    pub csv: String,

    /// Generated file name (`returns-<millis>.csv`).
    pub file_name: String,

    /// Upload key, same as the file name.
    pub file_key: String,

    /// Products the CSV was generated from.
    pub products: Vec<ParsedProduct>,
}

impl CsvGenerationResult {
    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.products.len()
    }
}
