//! CLI subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod generate;
pub mod parse;
pub mod request;
pub mod status;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

use retx_core::models::config::RetxConfig;
use retx_core::{ProcessType, ProductFieldType};

/// Location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("retx")
        .join("config.json")
}

/// Load configuration from `path`, the default location, or defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<RetxConfig> {
    if let Some(path) = path {
        debug!("Loading config from {}", path);
        return Ok(RetxConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(RetxConfig::from_file(&default_path)?)
    } else {
        Ok(RetxConfig::default())
    }
}

/// Read a whole input file, or stdin for `-`.
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = Path::new(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(fs::read_to_string(path)?)
}

/// Product identifier column label.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FieldArg {
    /// product_id
    #[value(name = "product_id")]
    ProductId,
    /// product_sku
    #[value(name = "product_sku")]
    ProductSku,
    /// product_url
    #[value(name = "product_url")]
    ProductUrl,
}

impl From<FieldArg> for ProductFieldType {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::ProductId => ProductFieldType::ProductId,
            FieldArg::ProductSku => ProductFieldType::ProductSku,
            FieldArg::ProductUrl => ProductFieldType::ProductUrl,
        }
    }
}

/// How the processing service matches rows to products.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProcessTypeArg {
    #[value(name = "PRODUCT_ID", alias = "product_id")]
    ProductId,
    #[value(name = "PRODUCT_SKU", alias = "product_sku")]
    ProductSku,
    #[value(name = "PRODUCT_ID_ON_ORDER_PERMALINK", alias = "product_id_on_order_permalink")]
    ProductIdOnOrderPermalink,
}

impl From<ProcessTypeArg> for ProcessType {
    fn from(arg: ProcessTypeArg) -> Self {
        match arg {
            ProcessTypeArg::ProductId => ProcessType::ProductId,
            ProcessTypeArg::ProductSku => ProcessType::ProductSku,
            ProcessTypeArg::ProductIdOnOrderPermalink => ProcessType::ProductIdOnOrderPermalink,
        }
    }
}
