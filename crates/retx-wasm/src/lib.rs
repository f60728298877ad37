//! WASM bindings for returns CSV preparation.
//!
//! This crate lets the dashboard parse order text and build returns CSVs
//! in the browser.

use wasm_bindgen::prelude::*;

use retx_core::generator::{Clock, CsvGenerator};
use retx_core::models::product::{CsvGenerationResult, ProductFieldType};
use retx_core::order::{OrderParser, OrderTextParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Browser clock.
struct JsClock;

impl Clock for JsClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_field(field: &str) -> Result<ProductFieldType, JsValue> {
    field.parse::<ProductFieldType>().map_err(to_js_error)
}

fn generate_with<C: Clock>(
    text: &str,
    field: ProductFieldType,
    clock: C,
) -> Result<CsvGenerationResult, String> {
    let products = OrderTextParser::new().parse(text);
    if products.is_empty() {
        return Err("Could not extract any products from the text. Check the format.".to_string());
    }

    CsvGenerator::with_clock(clock)
        .generate(&products, field)
        .map_err(|e| e.to_string())
}

fn generate(text: &str, field: ProductFieldType) -> Result<CsvGenerationResult, JsValue> {
    generate_with(text, field, JsClock).map_err(to_js_error)
}

/// Parse order text into an array of products.
#[wasm_bindgen]
pub fn parse_order_text(text: &str) -> Result<JsValue, JsValue> {
    let products = OrderTextParser::new().parse(text);
    serde_wasm_bindgen::to_value(&products).map_err(to_js_error)
}

/// Whether the text is a CSV export with a header row.
#[wasm_bindgen]
pub fn is_structured_csv(text: &str) -> bool {
    retx_core::order::is_structured_csv(text)
}

/// Parse order text and generate a returns CSV.
///
/// `field` is `product_id`, `product_sku` or `product_url`.
#[wasm_bindgen]
pub fn generate_csv(text: &str, field: &str) -> Result<JsValue, JsValue> {
    let result = generate(text, parse_field(field)?)?;
    serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
}

/// Returns CSV builder class for browser use.
#[wasm_bindgen]
pub struct ReturnsCsvBuilder {
    field: ProductFieldType,
}

#[wasm_bindgen]
impl ReturnsCsvBuilder {
    /// Create a builder labelling the identifier column `product_sku`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            field: ProductFieldType::default(),
        }
    }

    /// Choose the identifier column label.
    #[wasm_bindgen]
    pub fn set_field(&mut self, field: &str) -> Result<(), JsValue> {
        self.field = parse_field(field)?;
        Ok(())
    }

    /// Current identifier column label.
    #[wasm_bindgen(getter)]
    pub fn field(&self) -> String {
        self.field.to_string()
    }

    /// Parse order text into an array of products.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        parse_order_text(text)
    }

    /// Parse order text and generate a returns CSV.
    #[wasm_bindgen]
    pub fn generate(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = generate(text, self.field)?;
        serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
    }

    /// Generate and return only the CSV text.
    #[wasm_bindgen]
    pub fn generate_text(&self, text: &str) -> Result<String, JsValue> {
        generate(text, self.field).map(|r| r.csv)
    }
}

impl Default for ReturnsCsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
