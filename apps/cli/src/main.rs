//! Storefront CLI - price formatting, conversion and slug helpers.
//!
//! Commands:
//! - format: Render an amount in the display currency
//! - convert: Convert a source currency amount and render it
//! - slugify: Derive a URL slug from a display name
//! - discount: Show a discounted price against its original

mod main_lib;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use storefront_core::catalog::slugify;
use storefront_core::fx::FxServiceTrait;
use storefront_core::pricing::PriceDisplay;

use main_lib::{init_tracing, load_settings};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Storefront price and catalog helpers", long_about = None)]
struct Cli {
    /// JSON settings file (locale, currency, sourceCurrency, exchangeRate)
    #[arg(long, env = "SF_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an amount already in the display currency
    Format {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Omit the currency symbol
        #[arg(long)]
        no_symbol: bool,
    },

    /// Convert an amount from the source currency and render it
    Convert {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Derive a URL slug from a display name
    Slugify {
        /// Display name; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Render a price with its original price and discount label
    Discount { price: Decimal, original: Decimal },
}

fn run(cli: Cli) -> Result<String> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Format { amount, no_symbol } => {
            let service = load_settings(config)?.build_fx_service()?;
            render_string(service.format_amount(amount, !no_symbol)?, cli.json)
        }
        Commands::Convert { amount } => {
            let service = load_settings(config)?.build_fx_service()?;
            render_string(service.convert_and_format(amount)?, cli.json)
        }
        Commands::Slugify { name } => render_string(slugify(&name.join(" ")), cli.json),
        Commands::Discount { price, original } => {
            let service = load_settings(config)?.build_fx_service()?;
            let display = PriceDisplay::new(service.formatter(), price, Some(original), true);
            if cli.json {
                return Ok(serde_json::to_string(&display)?);
            }
            Ok(match (&display.original_price, &display.discount_label) {
                (Some(orig), Some(label)) => format!("{} (was {}, {})", display.price, orig, label),
                _ => display.price,
            })
        }
    }
}

fn render_string(value: String, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&value)?)
    } else {
        Ok(value)
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let output = run(cli)?;
    println!("{}", output);
    Ok(())
}
