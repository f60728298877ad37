//! Order date extraction and normalization.
//!
//! Order systems paste dates as `M/D/YYYY`. Extracted dates are rewritten
//! to `DD/MM/YYYY`. When both parts are 12 or less the text is still read
//! as month first; there is no locale detection, so a `D/M/YYYY` source
//! comes out with day and month swapped.

use super::patterns::{DATE_SLASH, DATE_SLASH_EXACT, ORDER_DATE_LABELED};
use super::{ExtractionMatch, FieldExtractor};

/// Order date extractor. Produces the raw matched date text.
pub struct OrderDateExtractor;

impl OrderDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrderDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for OrderDateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // "Order date: 12/29/2025"
        for caps in ORDER_DATE_LABELED.captures_iter(text) {
            let Some(date) = caps.get(1) else {
                continue;
            };
            results.push(
                ExtractionMatch::new(date.as_str().to_string(), date.as_str())
                    .with_position(date.start(), date.end()),
            );
        }

        // Bare dates anywhere
        for m in DATE_SLASH.find_iter(text) {
            if results.iter().any(|r| r.position == Some((m.start(), m.end()))) {
                continue;
            }
            results.push(
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end()),
            );
        }

        results
    }
}

/// Rewrite an `M/D/YYYY` date as zero-padded `DD/MM/YYYY`.
///
/// Anything that is not exactly a numeric slash date is returned unchanged.
/// `03/04/2025` becomes `04/03/2025`: ambiguous dates are always read as
/// month first.
pub fn normalize_order_date(raw: &str) -> String {
    let Some(caps) = DATE_SLASH_EXACT.captures(raw.trim()) else {
        return raw.to_string();
    };

    let month = &caps[1];
    let day = &caps[2];
    let year = &caps[3];

    format!("{:0>2}/{:0>2}/{}", day, month, year)
}

/// Extract the order date from order text as `DD/MM/YYYY`, or empty.
pub fn extract_order_date(text: &str) -> String {
    OrderDateExtractor::new()
        .extract(text)
        .map(|m| normalize_order_date(&m.value))
        .unwrap_or_default()
}
