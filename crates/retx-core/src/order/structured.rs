//! Parsing of exported order CSVs that carry their own header row.
//!
//! Expected shape:
//! `order_id,order_date,product_id,id,price,product,purchased_size,quantity,recommended_size,return,return_date,sku`
//! Only the columns named in [`Columns`] are read; any of them may be absent.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::models::product::{ParsedProduct, DEFAULT_QUANTITY, DEFAULT_SIZE};

use super::rules::normalize_order_date;

/// Header names that can carry the product identifier, in order of preference.
const IDENTIFIER_COLUMNS: [&str; 3] = ["product_id", "product_sku", "sku"];

/// Split one CSV line on commas outside double quotes.
///
/// Quote characters toggle quoting and are dropped; each field is trimmed.
/// There is no escape handling.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Trimmed, non-blank lines of `text`.
fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

fn header_names(line: &str) -> Vec<String> {
    split_csv_line(&line.to_lowercase())
}

/// Whether `text` looks like a CSV export with a header row.
///
/// The first non-blank line must name a product identifier column and at
/// least one more non-blank line must follow it.
pub fn is_structured_csv(text: &str) -> bool {
    let lines = content_lines(text);
    if lines.len() < 2 {
        return false;
    }

    let headers = header_names(lines[0]);
    IDENTIFIER_COLUMNS
        .iter()
        .any(|name| headers.iter().any(|h| h == name))
}

/// Column positions found in the header row.
#[derive(Debug, Default)]
struct Columns {
    order_id: Option<usize>,
    order_date: Option<usize>,
    product_id: Option<usize>,
    product_sku: Option<usize>,
    sku: Option<usize>,
    purchased_size: Option<usize>,
    quantity: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &[String]) -> Self {
        let index_of = |name: &str| headers.iter().position(|h| h == name);
        Self {
            order_id: index_of("order_id"),
            order_date: index_of("order_date"),
            product_id: index_of("product_id"),
            product_sku: index_of("product_sku"),
            sku: index_of("sku"),
            purchased_size: index_of("purchased_size"),
            quantity: index_of("quantity"),
        }
    }
}

/// Non-empty trimmed value of column `index`, if present.
fn cell(columns: &[String], index: Option<usize>) -> Option<&str> {
    index
        .and_then(|i| columns.get(i))
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn accept_size(value: &str) -> bool {
    value != "--" && !value.eq_ignore_ascii_case(DEFAULT_SIZE)
}

/// Parse a structured CSV into products.
///
/// `fallback_order_id` and `fallback_order_date` fill rows whose own
/// columns are missing or blank. Slash dates in the `order_date` column are
/// rewritten to `DD/MM/YYYY`; the fallback date is used as given. Rows without an identifier are skipped;
/// a repeated identifier keeps its first row.
pub fn parse_structured_csv(
    text: &str,
    fallback_order_id: &str,
    fallback_order_date: &str,
) -> Vec<ParsedProduct> {
    let lines = content_lines(text);
    if lines.len() < 2 {
        return Vec::new();
    }

    let headers = header_names(lines[0]);
    let cols = Columns::from_headers(&headers);
    debug!("CSV headers: {:?}", headers);
    debug!("CSV column indices: {:?}", cols);

    let mut seen = HashSet::new();
    let mut products = Vec::new();

    for (line_no, line) in lines.iter().enumerate().skip(1) {
        let columns = split_csv_line(line);

        let identifier = cell(&columns, cols.product_id)
            .or_else(|| cell(&columns, cols.product_sku))
            .or_else(|| cell(&columns, cols.sku));

        let Some(identifier) = identifier else {
            trace!("Line {}: no product identifier, skipped", line_no);
            continue;
        };

        if !seen.insert(identifier.to_string()) {
            trace!("Line {}: duplicate identifier {}, skipped", line_no, identifier);
            continue;
        }

        let size = match cell(&columns, cols.purchased_size) {
            Some(value) if accept_size(value) => value.to_string(),
            Some(value) => {
                trace!("Line {}: size {:?} rejected", line_no, value);
                DEFAULT_SIZE.to_string()
            }
            None => DEFAULT_SIZE.to_string(),
        };

        let product = ParsedProduct {
            order_id: cell(&columns, cols.order_id)
                .unwrap_or(fallback_order_id)
                .to_string(),
            order_date: cell(&columns, cols.order_date)
                .map(normalize_order_date)
                .unwrap_or_else(|| fallback_order_date.to_string()),
            product_identifier: identifier.to_string(),
            size_ordered: size,
            quantity: cell(&columns, cols.quantity)
                .unwrap_or(DEFAULT_QUANTITY)
                .to_string(),
        };

        trace!("Line {}: accepted {:?}", line_no, product);
        products.push(product);
    }

    debug!("Parsed {} products from structured CSV", products.len());
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EXPORT: &str = "\
order_id,order_date,product_id,id,price,product,purchased_size,quantity,recommended_size,return,return_date,sku
ORD-1,12/29/2025,P100,1,\"1,299.00\",\"Shirt, linen\",M,2,M,yes,1/5/2026,1017-002042-0008-579
ORD-1,12/29/2025,P200,2,49.00,Belt,One Size,,,,,1704-000043-0179
";

    #[test]
    fn test_split_respects_quotes() {
        assert_eq!(
            split_csv_line("a, \"b,c\" ,d"),
            vec!["a".to_string(), "b,c".to_string(), "d".to_string()]
        );
        assert_eq!(split_csv_line(""), vec![String::new()]);
        assert_eq!(split_csv_line("x,,y").len(), 3);
    }

    #[test]
    fn test_detect_structured() {
        assert!(is_structured_csv(EXPORT));
        assert!(is_structured_csv("SKU,Qty\nA-1,1"));
        assert!(!is_structured_csv("sku,qty"));
        assert!(!is_structured_csv("order_id,order_date\n1,2"));
        assert!(!is_structured_csv("ID\tSKU\tProduct\n1\t2\t3"));
    }

    #[test]
    fn test_parse_export() {
        let products = parse_structured_csv(EXPORT, "UNKNOWN", "");

        assert_eq!(products.len(), 2);
        assert_eq!(
            products[0],
            ParsedProduct {
                order_id: "ORD-1".to_string(),
                order_date: "29/12/2025".to_string(),
                product_identifier: "P100".to_string(),
                size_ordered: "M".to_string(),
                quantity: "2".to_string(),
            }
        );
        assert_eq!(products[1].size_ordered, "One Size");
        assert_eq!(products[1].quantity, "1");
    }

    #[test]
    fn test_identifier_preference_and_dedup() {
        let text = "product_sku,sku,order_id\n,S1,O1\nK2,S2,O1\n,S1,O2\n,,O3\n";
        let products = parse_structured_csv(text, "UNKNOWN", "");

        let ids: Vec<_> = products.iter().map(|p| p.product_identifier.as_str()).collect();
        assert_eq!(ids, vec!["S1", "K2"]);
        assert_eq!(products[0].order_id, "O1");
    }

    #[test]
    fn test_fallbacks_for_missing_columns() {
        let text = "sku,purchased_size\nA-1,--\nA-2,one size\nA-3,XL\n";
        let products = parse_structured_csv(text, "PREP7", "29/12/2025");

        assert_eq!(products.len(), 3);
        assert!(products.iter().all(|p| p.order_id == "PREP7"));
        assert!(products.iter().all(|p| p.order_date == "29/12/2025"));
        assert_eq!(products[0].size_ordered, "One Size");
        assert_eq!(products[1].size_ordered, "One Size");
        assert_eq!(products[2].size_ordered, "XL");
    }

    #[test]
    fn test_order_date_column_normalized() {
        let text = "order_id,order_date,product_id\nO1,12/29/2025,P1\nO1,1/5/2026,P2\nO1,2025-12-29,P3\n";
        let products = parse_structured_csv(text, "UNKNOWN", "");

        let dates: Vec<_> = products.iter().map(|p| p.order_date.as_str()).collect();
        assert_eq!(dates, vec!["29/12/2025", "05/01/2026", "2025-12-29"]);
    }

    #[test]
    fn test_header_only() {
        assert!(parse_structured_csv("product_id,order_id\n\n  \n", "UNKNOWN", "").is_empty());
    }
}
