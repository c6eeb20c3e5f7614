//! Statement printing pipeline
//!
//! Loads the data files named in [`StatementConfig`], prices the selected
//! invoice and renders it in the configured format.

use anyhow::{Context, Result};

use domain_statement::{
    HtmlRenderer, Invoice, PlainTextRenderer, PlayCatalog, PricingService, StatementBuilder,
    StatementRenderer,
};

use crate::config::{OutputFormat, StatementConfig};
use crate::loader::{load_invoices, load_plays};

/// Loads inputs and renders the configured invoice's statement
pub fn run(config: &StatementConfig) -> Result<String> {
    let plays = load_plays(&config.plays_path)?;
    let invoices = load_invoices(&config.invoices_path)?;

    let invoice = invoices.get(config.invoice_index).with_context(|| {
        format!(
            "invoice index {} out of range ({} invoices in {})",
            config.invoice_index,
            invoices.len(),
            config.invoices_path.display()
        )
    })?;

    render_invoice(config, invoice, &plays)
}

/// Prices and renders one invoice
pub fn render_invoice(config: &StatementConfig, invoice: &Invoice, plays: &PlayCatalog) -> Result<String> {
    let pricing = PricingService::new(config.currency)
        .with_context(|| format!("cannot price in {}", config.currency))?;
    let statement = StatementBuilder::new(plays)
        .with_pricing(pricing)
        .build(invoice)
        .with_context(|| format!("failed to price statement for {}", invoice.customer))?;

    tracing::info!(
        customer = %statement.customer(),
        performances = statement.lines().len(),
        total = %statement.total_amount(),
        volume_credits = statement.total_volume_credits(),
        "Statement computed"
    );

    let options = config.render_options();
    let output = match config.format {
        OutputFormat::Text => PlainTextRenderer::new(options).render(&statement)?,
        OutputFormat::Html => HtmlRenderer::new(options).render(&statement)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&statement)?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}
