//! Data models for order parsing, CSV generation and processing requests.

pub mod config;
pub mod processing;
pub mod product;
