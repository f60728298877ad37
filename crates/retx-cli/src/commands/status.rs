//! Status command - summarize processing status reports.

use clap::Args;
use console::style;

use retx_core::ProcessingStatus;

use super::read_input;

/// Arguments for the status command.
#[derive(Args)]
pub struct StatusArgs {
    /// Status report JSON, a single object or an array ("-" for stdin)
    #[arg(required = true)]
    input: String,
}

pub fn run(args: StatusArgs) -> anyhow::Result<()> {
    let json = read_input(&args.input)?;
    let statuses = parse_statuses(&json)?;

    if statuses.is_empty() {
        println!("{} No processing runs found.", style("ℹ").blue());
        return Ok(());
    }

    for status in &statuses {
        print!("{}", format_status(status));
        println!();
    }

    Ok(())
}

fn parse_statuses(json: &str) -> anyhow::Result<Vec<ProcessingStatus>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

fn format_status(status: &ProcessingStatus) -> String {
    let marker = if status.is_failed() {
        style("✗").red()
    } else if status.is_finished() {
        style("✓").green()
    } else {
        style("…").yellow()
    };

    let mut output = String::new();
    output.push_str(&format!(
        "{} {} [{}] {}\n",
        marker, status.processing_id, status.status, status.domain
    ));
    output.push_str(&format!("  Executed: {}\n", status.execution_date));
    output.push_str(&format!("  Input:    {}\n", status.input_file_url));

    if let Some(url) = &status.output_file_url {
        output.push_str(&format!("  Output:   {}\n", url));
    }
    if let Some(ms) = status.duration_ms {
        output.push_str(&format!("  Duration: {}ms\n", ms));
    }
    if let Some(stats) = &status.stats {
        output.push_str(&format!(
            "  Rows:     {} processed, {} created, {} errors ({:.1}% success)\n",
            stats.total_processed,
            stats.total_created,
            stats.total_errors,
            stats.success_percent()
        ));
        for err in stats.errors_by_type.iter().flatten() {
            output.push_str(&format!("    {}: {}\n", err.code, err.count));
        }
    }
    if let Some(message) = &status.error_message {
        output.push_str(&format!("  Error:    {}\n", message));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "processingId": "p-1",
        "status": "COMPLETED",
        "executionDate": "2025-12-29",
        "domain": "shop.example.com",
        "inputFileUrl": "s3://b/returns-1.csv",
        "stats": {
            "totalProcessed": 4,
            "totalCreated": 3,
            "totalErrors": 1,
            "successRate": 75,
            "errorsByType": [{ "code": "NOT_FOUND", "count": 1 }]
        }
    }"#;

    #[test]
    fn test_parse_single_and_array() {
        assert_eq!(parse_statuses(REPORT).unwrap().len(), 1);
        assert_eq!(parse_statuses(&format!("[{0},{0}]", REPORT)).unwrap().len(), 2);
        assert!(parse_statuses("[]").unwrap().is_empty());
        assert!(parse_statuses("{}").is_err());
    }

    #[test]
    fn test_format_status() {
        console::set_colors_enabled(false);
        let status = &parse_statuses(REPORT).unwrap()[0];
        let text = format_status(status);

        assert!(text.contains("p-1 [COMPLETED] shop.example.com"));
        assert!(text.contains("4 processed, 3 created, 1 errors (75.0% success)"));
        assert!(text.contains("NOT_FOUND: 1"));
        assert!(!text.contains("Error:"));
    }
}
