//! Generate command - turn order text into a returns CSV.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use retx_core::order::{OrderParser, OrderTextParser};
use retx_core::{CsvGenerator, ProductFieldType};

use super::{load_config, read_input, FieldArg};

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Order text file ("-" for stdin)
    #[arg(required = true)]
    input: String,

    /// Label of the product identifier column (default from config)
    #[arg(long, value_enum)]
    field: Option<FieldArg>,

    /// Output file (default: stdout)
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Write the CSV into this directory under its generated file name
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: GenerateFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GenerateFormat {
    /// CSV document
    Csv,
    /// Generation result with file name and products
    Json,
}

pub fn run(args: GenerateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let field: ProductFieldType = args
        .field
        .map(Into::into)
        .unwrap_or(config.generator.field_type);

    let text = read_input(&args.input)?;
    if text.trim().is_empty() {
        anyhow::bail!("Input is empty. Paste the order text first.");
    }

    let products = OrderTextParser::new().parse(&text);
    if products.is_empty() {
        anyhow::bail!("Could not extract any products from {}. Check the text format.", args.input);
    }
    info!("Parsed {} products", products.len());

    let result = CsvGenerator::new().generate(&products, field)?;
    debug!("Generated {} ({} bytes)", result.file_name, result.csv.len());

    let output = match args.format {
        GenerateFormat::Csv => result.csv.clone(),
        GenerateFormat::Json => serde_json::to_string_pretty(&result)?,
    };

    let target = match (&args.output, &args.output_dir) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(dir)) => {
            fs::create_dir_all(dir)?;
            Some(dir.join(&result.file_name))
        }
        (None, None) => None,
    };

    if let Some(path) = target {
        fs::write(&path, &output)?;
        println!(
            "{} Wrote {} rows to {}",
            style("✓").green(),
            result.row_count(),
            path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
