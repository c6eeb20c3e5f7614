//! Theater Statement - CLI Binary
//!
//! Prints the statement for one invoice to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (reads data/invoices.json and data/plays.json)
//! cargo run --bin theater-statement
//!
//! # Run with environment variables
//! STATEMENT_FORMAT=html STATEMENT_LANGUAGE=en-US cargo run --bin theater-statement
//! ```
//!
//! # Environment Variables
//!
//! * `STATEMENT_INVOICES_PATH` - Invoice array JSON (default: data/invoices.json)
//! * `STATEMENT_PLAYS_PATH` - Play catalog JSON (default: data/plays.json)
//! * `STATEMENT_INVOICE_INDEX` - Invoice to print (default: 0)
//! * `STATEMENT_FORMAT` - text, html or json (default: text)
//! * `STATEMENT_LANGUAGE` - Label language: ko-KR, en-US, de-DE (default: ko-KR)
//! * `STATEMENT_NUMBER_LOCALE` - Currency formatting locale (default: en-US)
//! * `STATEMENT_CURRENCY` - Pricing currency, one with cents: USD, EUR or GBP (default: USD)
//! * `STATEMENT_FRACTION_DIGITS` - Fraction digits for amounts (default: 2)
//! * `STATEMENT_LOG_LEVEL` - Log level (default: info)

use anyhow::{Context, Result};
use interface_cli::{app, config::StatementConfig, telemetry::init_tracing};

fn main() -> Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = StatementConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.log_level);

    tracing::info!(
        invoices = %config.invoices_path.display(),
        plays = %config.plays_path.display(),
        format = ?config.format,
        "Printing statement"
    );

    let output = app::run(&config)?;
    print!("{output}");

    Ok(())
}
