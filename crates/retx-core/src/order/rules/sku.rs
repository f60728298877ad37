//! SKU and size/quantity extraction.

use regex::Regex;

use super::patterns::{SIZE_QUANTITY, SKU_STRICT, SKU_TABULAR};
use super::{ExtractionMatch, FieldExtractor};

/// SKU extractor.
///
/// The tabular variant accepts `dddd-dddddd-dddd` with an optional `-ddd`
/// variant suffix; the strict variant requires the suffix.
pub struct SkuExtractor {
    require_variant: bool,
}

impl SkuExtractor {
    /// Extractor for SKUs inside an order table.
    pub fn tabular() -> Self {
        Self { require_variant: false }
    }

    /// Extractor for SKUs in unstructured text.
    pub fn strict() -> Self {
        Self { require_variant: true }
    }

    fn pattern(&self) -> &'static Regex {
        if self.require_variant {
            &*SKU_STRICT
        } else {
            &*SKU_TABULAR
        }
    }
}

impl FieldExtractor for SkuExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern().find(text).map(|m| {
            ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                .with_position(m.start(), m.end())
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.pattern()
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Parse a `--<TAB>SIZE<TAB>QTY` row into `(size, quantity)`.
///
/// Numeric sizes are rejected so price or count columns are not taken
/// for a size.
pub fn parse_size_quantity(line: &str) -> Option<(String, String)> {
    let caps = SIZE_QUANTITY.captures(line)?;
    let size = caps[1].trim();
    let quantity = caps[2].trim();

    if size.is_empty() || is_numeric_size(size) {
        return None;
    }

    Some((size.to_string(), quantity.to_string()))
}

/// Digits with optional decimal separators, e.g. `38` or `19,99`.
fn is_numeric_size(size: &str) -> bool {
    size.chars().any(|c| c.is_ascii_digit())
        && size.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabular_sku_with_and_without_variant() {
        let extractor = SkuExtractor::tabular();
        assert_eq!(
            extractor.extract("\t1017-002042-0008-579\tLinen shirt").unwrap().value,
            "1017-002042-0008-579"
        );
        assert_eq!(
            extractor.extract("1704-000043-0179\tBelt").unwrap().value,
            "1704-000043-0179"
        );
    }

    #[test]
    fn test_strict_sku_requires_variant() {
        let extractor = SkuExtractor::strict();
        assert!(extractor.extract("1704-000043-0179").is_none());
        assert_eq!(
            extractor.extract("see 9999-123456-7890-001.").unwrap().value,
            "9999-123456-7890-001"
        );
    }

    #[test]
    fn test_sku_not_inside_longer_numbers() {
        let extractor = SkuExtractor::strict();
        assert!(extractor.extract("19999-123456-7890-001").is_none());
        assert!(extractor.extract("9999-123456-7890-0012").is_none());
    }

    #[test]
    fn test_extract_all_positions() {
        let text = "9999-123456-7890-001 x 9999-123456-7890-001";
        let skus = SkuExtractor::strict().extract_all(text);
        assert_eq!(skus.len(), 2);
        assert_eq!(skus[0].position, Some((0, 20)));
        assert_eq!(skus[1].position, Some((23, 43)));
    }

    #[test]
    fn test_size_quantity() {
        assert_eq!(
            parse_size_quantity("--\tM\t2"),
            Some(("M".to_string(), "2".to_string()))
        );
        assert_eq!(
            parse_size_quantity("\t--\t\tEU 42 \t1"),
            Some(("EU 42".to_string(), "1".to_string()))
        );
    }

    #[test]
    fn test_size_quantity_rejects_numeric_size() {
        assert_eq!(parse_size_quantity("--\t38\t1"), None);
        assert_eq!(parse_size_quantity("--\t19.99\t1"), None);
        assert_eq!(parse_size_quantity("M\t2"), None);
    }

    #[test]
    fn test_size_quantity_keeps_word_sizes() {
        assert_eq!(
            parse_size_quantity("--\tinf\t1"),
            Some(("inf".to_string(), "1".to_string()))
        );
        assert_eq!(
            parse_size_quantity("--\tNaN\t1"),
            Some(("NaN".to_string(), "1".to_string()))
        );
        assert_eq!(parse_size_quantity("--\t42,5\t1"), None);
    }
}
