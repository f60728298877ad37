//! Batch command - generate returns CSVs for many order text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use retx_core::order::{OrderParser, OrderTextParser};
use retx_core::{CsvGenerationResult, CsvGenerator, ProductFieldType};

use super::{load_config, FieldArg};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory (default from config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Label of the product identifier column (default from config)
    #[arg(long, value_enum)]
    field: Option<FieldArg>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileOutcome {
    path: PathBuf,
    written: Option<(PathBuf, usize)>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let field: ProductFieldType = args
        .field
        .map(Into::into)
        .unwrap_or(config.generator.field_type);
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.generator.output_dir.clone());

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = OrderTextParser::new();
    let generator = CsvGenerator::new();
    let mut outcomes = Vec::with_capacity(files.len());

    for path in files {
        let outcome = match process_file(&path, &parser, &generator, field) {
            Ok(result) => {
                let target = output_dir.join(output_name(&path, &result));
                match fs::write(&target, &result.csv) {
                    Ok(()) => {
                        debug!("{} -> {}", path.display(), target.display());
                        FileOutcome {
                            path,
                            written: Some((target, result.row_count())),
                            error: None,
                        }
                    }
                    Err(e) => FileOutcome {
                        path,
                        written: None,
                        error: Some(e.to_string()),
                    },
                }
            }
            Err(e) => FileOutcome {
                path,
                written: None,
                error: Some(e.to_string()),
            },
        };

        if let Some(ref e) = outcome.error {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", outcome.path.display(), e);
            } else {
                pb.abandon();
                error!("Failed to process {}: {}", outcome.path.display(), e);
                anyhow::bail!("Failed to process {}: {}", outcome.path.display(), e);
            }
        }

        outcomes.push(outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();
    print_summary(&outcomes);

    debug!("Batch finished in {:?}", start.elapsed());
    Ok(())
}

fn process_file(
    path: &Path,
    parser: &OrderTextParser,
    generator: &CsvGenerator,
    field: ProductFieldType,
) -> anyhow::Result<CsvGenerationResult> {
    let text = fs::read_to_string(path)?;
    let products = parser.parse(&text);
    if products.is_empty() {
        anyhow::bail!("no data found");
    }
    Ok(generator.generate(&products, field)?)
}

/// `<input stem>-returns-<millis>.csv`, so files generated in the same
/// millisecond stay distinct.
fn output_name(input: &Path, result: &CsvGenerationResult) -> String {
    match input.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => format!("{}-{}", stem, result.file_name),
        _ => result.file_name.clone(),
    }
}

fn print_summary(outcomes: &[FileOutcome]) {
    let succeeded = outcomes.iter().filter(|o| o.written.is_some()).count();
    let failed = outcomes.len() - succeeded;

    for outcome in outcomes {
        match (&outcome.written, &outcome.error) {
            (Some((target, rows)), _) => println!(
                "{} {} -> {} ({} rows)",
                style("✓").green(),
                outcome.path.display(),
                target.display(),
                rows
            ),
            (None, Some(e)) => println!(
                "{} {}: {}",
                style("✗").red(),
                outcome.path.display(),
                e
            ),
            (None, None) => {}
        }
    }

    println!();
    println!(
        "{} {} succeeded, {} failed",
        style("ℹ").blue(),
        succeeded,
        failed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use retx_core::models::product::ParsedProduct;

    fn result(file_name: &str) -> CsvGenerationResult {
        CsvGenerationResult {
            csv: String::new(),
            file_name: file_name.to_string(),
            file_key: file_name.to_string(),
            products: vec![ParsedProduct::new("A", "", "B")],
        }
    }

    #[test]
    fn test_output_name_uses_stem() {
        assert_eq!(
            output_name(Path::new("in/order-17.txt"), &result("returns-5.csv")),
            "order-17-returns-5.csv"
        );
    }

    #[test]
    fn test_output_name_without_stem() {
        assert_eq!(output_name(Path::new(""), &result("returns-5.csv")), "returns-5.csv");
    }
}
