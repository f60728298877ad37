//! CSV serialization of parsed products.
//!
//! Fields are written as-is: nothing is quoted or escaped, so a value that
//! contains a comma or newline breaks the row. Consumers of these files
//! rely on the current unquoted format.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::GenerationError;
use crate::models::processing::ReturnReason;
use crate::models::product::{CsvGenerationResult, ParsedProduct, ProductFieldType};

use super::clock::{Clock, SystemClock};

/// Header row for a CSV labelled with `field`.
pub fn csv_header(field: ProductFieldType) -> [&'static str; 5] {
    [
        "order_id",
        "order_date",
        field.as_str(),
        "size_ordered",
        "return_reason",
    ]
}

/// Rewrite a `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Dates without a dash are already in `DD/MM/YYYY` and pass through.
pub fn format_order_date(date: &str) -> String {
    if date.contains('-') {
        let parts: Vec<&str> = date.split('-').collect();
        if let [year, month, day] = parts.as_slice() {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date.to_string()
}

/// File name for a CSV generated at `timestamp_millis`.
pub fn file_name_for(timestamp_millis: i64) -> String {
    format!("returns-{}.csv", timestamp_millis)
}

/// Returns CSV generator.
#[derive(Debug, Clone, Default)]
pub struct CsvGenerator<C: Clock = SystemClock> {
    clock: C,
}

impl CsvGenerator<SystemClock> {
    /// Create a generator that names files after the wall clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> CsvGenerator<C> {
    /// Create a generator that names files after `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Render the CSV text for `products`.
    ///
    /// Rows are `\n`-joined with no trailing newline.
    pub fn render(
        &self,
        products: &[ParsedProduct],
        field: ProductFieldType,
    ) -> Result<String, GenerationError> {
        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(vec![]);

        wtr.write_record(csv_header(field))?;

        for product in products {
            let order_date = format_order_date(&product.order_date);
            wtr.write_record([
                product.order_id.as_str(),
                order_date.as_str(),
                product.product_identifier.as_str(),
                product.size_ordered.as_str(),
                ReturnReason::Unknown.as_str(),
            ])?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| GenerationError::Write(e.to_string()))?;
        let mut csv = String::from_utf8(bytes).map_err(|e| GenerationError::Write(e.to_string()))?;

        if csv.ends_with('\n') {
            csv.pop();
        }

        Ok(csv)
    }

    /// Generate the CSV document and its file name.
    pub fn generate(
        &self,
        products: &[ParsedProduct],
        field: ProductFieldType,
    ) -> Result<CsvGenerationResult, GenerationError> {
        if products.is_empty() {
            return Err(GenerationError::EmptyInput);
        }

        let csv = self.render(products, field)?;
        let file_name = file_name_for(self.clock.now_millis());
        debug!("Generated {} with {} rows", file_name, products.len());

        Ok(CsvGenerationResult {
            csv,
            file_key: file_name.clone(),
            file_name,
            products: products.to_vec(),
        })
    }
}
