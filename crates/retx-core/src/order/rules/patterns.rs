//! Common regex patterns for order text extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Order id: "ID: ABC123"
    pub static ref ORDER_ID_LABELED: Regex = Regex::new(
        r"ID:\s*([A-Za-z0-9]+)"
    ).unwrap();

    // Order id tokens: PREP12345, XXX_something
    pub static ref ORDER_ID_TOKEN: Regex = Regex::new(
        r"(?i)\b(PREP\d+|XXX_\w+)"
    ).unwrap();

    // Labeled order date: "Order date: 12/29/2025"
    pub static ref ORDER_DATE_LABELED: Regex = Regex::new(
        r"(?i)Order\s+date:\s*(\d{1,2}/\d{1,2}/\d{4})"
    ).unwrap();

    // Any D/M/YYYY-shaped date
    pub static ref DATE_SLASH: Regex = Regex::new(
        r"\b(\d{1,2}/\d{1,2}/\d{4})\b"
    ).unwrap();

    // Whole-string numeric date, used for normalization
    pub static ref DATE_SLASH_EXACT: Regex = Regex::new(
        r"^(\d{1,2})/(\d{1,2})/(\d{4})$"
    ).unwrap();

    // SKU inside order tables: 1704-000043-0179 or 1017-002042-0008-579
    pub static ref SKU_TABULAR: Regex = Regex::new(
        r"\b\d{4}-\d{6}-\d{4}(?:-\d{3})?\b"
    ).unwrap();

    // SKU anywhere in free text, variant suffix required
    pub static ref SKU_STRICT: Regex = Regex::new(
        r"\b\d{4}-\d{6}-\d{4}-\d{3}\b"
    ).unwrap();

    // Size/quantity row under a SKU: "--\tM\t2"
    pub static ref SIZE_QUANTITY: Regex = Regex::new(
        r"--[ \t]*\t[ \t]*([^\t\r\n]+?)[ \t]*\t[ \t]*(\d+)\b"
    ).unwrap();
}
