//! Parse command - show the products found in order text.

use clap::Args;
use console::style;
use tracing::info;

use retx_core::models::product::ParsedProduct;
use retx_core::order::OrderTextParser;

use super::read_input;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Order text file ("-" for stdin)
    #[arg(required = true)]
    input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ParseFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ParseFormat {
    /// JSON array of products
    Json,
    /// Tab-separated table
    Text,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;

    let (products, strategy) = OrderTextParser::new().parse_with_strategy(&text);
    let Some(strategy) = strategy else {
        anyhow::bail!("No data found in {}. Check the text format.", args.input);
    };

    info!("Found {} products with {:?} strategy", products.len(), strategy);

    match args.format {
        ParseFormat::Json => println!("{}", serde_json::to_string_pretty(&products)?),
        ParseFormat::Text => print!("{}", format_table(&products)),
    }

    eprintln!(
        "{} {} products ({:?} strategy)",
        style("ℹ").blue(),
        products.len(),
        strategy
    );

    Ok(())
}

fn format_table(products: &[ParsedProduct]) -> String {
    let mut output = String::from("order_id\torder_date\tproduct\tsize\tquantity\n");
    for p in products {
        output.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            p.order_id, p.order_date, p.product_identifier, p.size_ordered, p.quantity
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table() {
        let products = vec![ParsedProduct::new("A1", "29/12/2025", "SKU-1").with_size("M")];
        assert_eq!(
            format_table(&products),
            "order_id\torder_date\tproduct\tsize\tquantity\nA1\t29/12/2025\tSKU-1\tM\t1\n"
        );
    }
}
