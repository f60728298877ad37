//! Request command - build the processing request for an uploaded CSV.

use clap::Args;

use retx_core::ProcessCsvParams;

use super::{load_config, ProcessTypeArg};

/// Arguments for the request command.
#[derive(Args)]
pub struct RequestArgs {
    /// Key the CSV was uploaded under (e.g. returns-1767000000000.csv)
    #[arg(long, required = true)]
    file_key: String,

    /// Store domain (default from config)
    #[arg(long)]
    domain: Option<String>,

    /// Product matching mode (default from config)
    #[arg(long, value_enum)]
    process_type: Option<ProcessTypeArg>,

    /// Ignore the ordered size when matching
    #[arg(long)]
    ignore_ordered_size: bool,

    /// Do not ask for a completion e-mail
    #[arg(long)]
    no_notification: bool,

    /// Completion e-mail recipient address
    #[arg(long)]
    recipient_email: Option<String>,

    /// Completion e-mail recipient name
    #[arg(long)]
    recipient_name: Option<String>,
}

pub fn run(args: RequestArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut processing = load_config(config_path)?.processing;

    if let Some(domain) = args.domain {
        processing.domain = domain;
    }
    if let Some(process_type) = args.process_type {
        processing.process_type = process_type.into();
    }
    if args.ignore_ordered_size {
        processing.ignore_ordered_size = true;
    }
    if args.no_notification {
        processing.notification.enabled = false;
    }
    if let Some(email) = args.recipient_email {
        processing.notification.recipient_email = email;
    }
    if let Some(name) = args.recipient_name {
        processing.notification.recipient_name = name;
    }

    let params = ProcessCsvParams::from_config(&args.file_key, &processing)?;
    println!("{}", serde_json::to_string_pretty(&params)?);

    Ok(())
}
