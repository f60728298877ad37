//! Multi-strategy order text parser.

use tracing::{debug, trace};

use crate::models::product::{ParsedProduct, UNKNOWN_ORDER_ID};

use super::rules::{extract_order_date, extract_order_id, parse_size_quantity, FieldExtractor, SkuExtractor};
use super::structured::{is_structured_csv, parse_structured_csv};
use super::OrderParser;

/// Lines searched below a SKU for its size/quantity row.
const SIZE_LOOKAHEAD: usize = 5;

/// Extraction strategy that produced a parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// CSV export with a header row.
    StructuredCsv,
    /// Pasted order confirmation with an `ID / SKU / Product` table.
    Tabular,
    /// Every strict SKU anywhere in the text.
    Generic,
}

/// Order-level values shared by every product in one parse.
struct OrderContext {
    order_id: String,
    order_date: String,
}

impl OrderContext {
    fn from_text(text: &str) -> Self {
        Self {
            order_id: extract_order_id(text).unwrap_or_else(|| UNKNOWN_ORDER_ID.to_string()),
            order_date: extract_order_date(text),
        }
    }

    fn product(&self, identifier: impl Into<String>) -> ParsedProduct {
        ParsedProduct::new(self.order_id.clone(), self.order_date.clone(), identifier)
    }
}

/// Order text parser.
///
/// Strategies run in order and the first one that finds products wins:
/// structured CSV, then the tabular order confirmation layout, then a bare
/// SKU scan. Structured CSV input only ever runs the CSV strategy.
#[derive(Debug, Clone, Default)]
pub struct OrderTextParser;

impl OrderTextParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse and report which strategy produced the products.
    pub fn parse_with_strategy(&self, text: &str) -> (Vec<ParsedProduct>, Option<Strategy>) {
        if text.trim().is_empty() {
            return (Vec::new(), None);
        }

        let ctx = OrderContext::from_text(text);
        debug!("Order context: id={} date={:?}", ctx.order_id, ctx.order_date);

        if is_structured_csv(text) {
            let products = parse_structured_csv(text, &ctx.order_id, &ctx.order_date);
            return finish(products, Strategy::StructuredCsv);
        }

        if let Some(products) = self.parse_tabular(text, &ctx) {
            return finish(products, Strategy::Tabular);
        }

        if let Some(products) = self.parse_generic(text, &ctx) {
            return finish(products, Strategy::Generic);
        }

        debug!("No products found");
        (Vec::new(), None)
    }

    /// Order confirmation tables.
    ///
    /// Leading tabs matter here, so lines are only trimmed to drop blanks.
    /// After a product the scan resumes below its size row, or below the
    /// look-ahead window when it has none.
    fn parse_tabular(&self, text: &str, ctx: &OrderContext) -> Option<Vec<ParsedProduct>> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

        let header = lines
            .iter()
            .position(|l| l.contains("ID") && l.contains("SKU") && l.contains("Product"))?;
        debug!("Order table header at line {}", header);

        let skus = SkuExtractor::tabular();
        let mut products = Vec::new();
        let mut i = header + 1;

        while i < lines.len() {
            let Some(sku) = skus.extract(lines[i]) else {
                i += 1;
                continue;
            };

            let mut product = ctx.product(sku.value);

            // Without a size row the whole look-ahead window belongs to this
            // product, including any SKU-shaped references inside it.
            let window_end = (i + 1 + SIZE_LOOKAHEAD).min(lines.len());
            let mut next = window_end;

            for (j, line) in lines.iter().enumerate().take(window_end).skip(i + 1) {
                if let Some((size, quantity)) = parse_size_quantity(line) {
                    product = product.with_size(size).with_quantity(quantity);
                    next = j + 1;
                    break;
                }
            }

            trace!("Product block lines {}..{}", i, next);
            products.push(product);
            i = next;
        }

        (!products.is_empty()).then_some(products)
    }

    /// Every strict SKU in the text, duplicates included.
    fn parse_generic(&self, text: &str, ctx: &OrderContext) -> Option<Vec<ParsedProduct>> {
        let products: Vec<ParsedProduct> = SkuExtractor::strict()
            .extract_all(text)
            .into_iter()
            .map(|sku| ctx.product(sku.value))
            .collect();

        (!products.is_empty()).then_some(products)
    }
}

fn finish(products: Vec<ParsedProduct>, strategy: Strategy) -> (Vec<ParsedProduct>, Option<Strategy>) {
    debug!("{:?} strategy produced {} products", strategy, products.len());
    if products.is_empty() {
        (products, None)
    } else {
        (products, Some(strategy))
    }
}

impl OrderParser for OrderTextParser {
    fn parse(&self, text: &str) -> Vec<ParsedProduct> {
        self.parse_with_strategy(text).0
    }
}

/// Parse order text with the default parser.
pub fn parse_order_text(text: &str) -> Vec<ParsedProduct> {
    OrderTextParser::new().parse(text)
}
