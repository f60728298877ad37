//! Core library for returns CSV preparation.
//!
//! This crate provides:
//! - Order text parsing (structured CSV, tabular order confirmations, bare SKU scan)
//! - Order id and order date extraction with date normalization
//! - Returns CSV generation with an injectable clock for file naming
//! - Request/response models for the returns processing service

pub mod error;
pub mod generator;
pub mod models;
pub mod order;

pub use error::{GenerationError, RequestError, RetxError, Result};
pub use generator::{Clock, CsvGenerator, FixedClock, SystemClock};
pub use models::config::RetxConfig;
pub use models::processing::{ProcessCsvParams, ProcessType, ProcessingStatus, ReturnReason};
pub use models::product::{CsvGenerationResult, ParsedProduct, ProductFieldType};
pub use order::{parse_order_text, OrderParser, OrderTextParser};
