//! CLI application for preparing returns CSV files from order text.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, generate, parse, request, status};

/// Returns CSV preparation - Turn pasted order text into returns CSV files
#[derive(Parser)]
#[command(name = "retx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse order text and show the extracted products
    Parse(parse::ParseArgs),

    /// Generate a returns CSV from order text
    Generate(generate::GenerateArgs),

    /// Generate returns CSVs for many order text files
    Batch(batch::BatchArgs),

    /// Build the processing request for an uploaded CSV
    Request(request::RequestArgs),

    /// Summarize a processing status report
    Status(status::StatusArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Parse(args) => parse::run(args),
        Commands::Generate(args) => generate::run(args, config_path),
        Commands::Batch(args) => batch::run(args, config_path),
        Commands::Request(args) => request::run(args, config_path),
        Commands::Status(args) => status::run(args),
        Commands::Config(args) => config::run(args),
    }
}
