//! Order id extraction.

use tracing::debug;

use super::patterns::{ORDER_ID_LABELED, ORDER_ID_TOKEN};
use super::{ExtractionMatch, FieldExtractor};

/// Order id extractor.
///
/// Labeled ids (`ID: ABC123`) win over bare `PREP<digits>` / `XXX_<word>`
/// tokens, wherever they appear in the text.
pub struct OrderIdExtractor;

impl OrderIdExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrderIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for OrderIdExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in ORDER_ID_LABELED.captures_iter(text) {
            let (Some(full), Some(id)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            results.push(
                ExtractionMatch::new(id.as_str().to_string(), full.as_str())
                    .with_position(full.start(), full.end()),
            );
        }

        for caps in ORDER_ID_TOKEN.captures_iter(text) {
            let Some(token) = caps.get(1) else {
                continue;
            };
            if results.iter().any(|r| r.value == token.as_str()) {
                continue;
            }
            results.push(
                ExtractionMatch::new(token.as_str().to_string(), token.as_str())
                    .with_position(token.start(), token.end()),
            );
        }

        results
    }
}

/// Extract the order id from order text, if any.
pub fn extract_order_id(text: &str) -> Option<String> {
    let found = OrderIdExtractor::new().extract(text)?;
    debug!("Order id {} from {:?}", found.value, found.source);
    Some(found.value)
}
