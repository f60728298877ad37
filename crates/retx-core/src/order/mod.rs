//! Order text parsing.

mod parser;
pub mod rules;
pub mod structured;

pub use parser::{parse_order_text, OrderTextParser, Strategy};
pub use structured::{is_structured_csv, split_csv_line};

use crate::models::product::ParsedProduct;

/// Trait for order text parsers.
///
/// Parsing never fails: text with nothing recognizable yields no products.
pub trait OrderParser {
    /// Extract product records from order text.
    fn parse(&self, text: &str) -> Vec<ParsedProduct>;
}
