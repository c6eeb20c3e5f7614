//! Statement construction
//!
//! [`StatementBuilder`] folds an invoice's performances, in order, into a
//! [`Statement`]: one line per performance plus the total charge and total
//! loyalty credits. Rendering to text is a separate step (see
//! [`crate::render`]).

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, MoneyError};

use crate::error::StatementError;
use crate::invoice::{Audience, Invoice};
use crate::play::PlayCatalog;
use crate::pricing::PricingService;
use crate::render::{PlainTextRenderer, RenderOptions, StatementRenderer};

/// One priced performance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub play_name: String,
    pub audience: Audience,
    pub amount: Money,
    pub volume_credits: u64,
}

/// A priced invoice
///
/// Built fresh for each invoice and never mutated afterwards. The total is
/// kept in minor units of `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    customer: String,
    currency: Currency,
    lines: Vec<StatementLine>,
    total_minor: i64,
    total_volume_credits: u64,
}

impl Statement {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Lines in invoice order
    pub fn lines(&self) -> &[StatementLine] {
        &self.lines
    }

    /// Total charge in minor units (cents)
    pub fn total_minor(&self) -> i64 {
        self.total_minor
    }

    pub fn total_amount(&self) -> Money {
        Money::from_minor(self.total_minor, self.currency)
    }

    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

/// Builds statements against a play catalog
pub struct StatementBuilder<'a> {
    plays: &'a PlayCatalog,
    pricing: PricingService,
}

impl<'a> StatementBuilder<'a> {
    /// Creates a builder pricing in USD
    pub fn new(plays: &'a PlayCatalog) -> Self {
        Self {
            plays,
            pricing: PricingService::default(),
        }
    }

    pub fn with_pricing(mut self, pricing: PricingService) -> Self {
        self.pricing = pricing;
        self
    }

    /// Prices every performance of `invoice`
    ///
    /// # Errors
    ///
    /// * `StatementError::MissingPlay` if a performance's play is not in the catalog
    /// * `StatementError::UnknownGenre` if a play's genre has no pricing rule
    pub fn build(&self, invoice: &Invoice) -> Result<Statement, StatementError> {
        let _span = tracing::debug_span!("statement", customer = %invoice.customer).entered();

        let mut total_minor = 0i64;
        let mut total_volume_credits = 0u64;
        let mut lines = Vec::with_capacity(invoice.performances.len());

        for performance in &invoice.performances {
            let play = self.plays.get(&performance.play_id).map_err(|err| {
                tracing::warn!(play_id = %performance.play_id, "Performance references unknown play");
                err
            })?;

            let charge = self.pricing.charge_for(performance, play)?;
            let amount = self.pricing.money(charge);
            let volume_credits = self.pricing.volume_credits_for(performance, play);

            tracing::trace!(
                play = %play.name,
                audience = performance.audience.get(),
                amount = %amount,
                volume_credits,
                "Priced performance"
            );

            total_volume_credits += volume_credits;
            total_minor = total_minor.checked_add(charge).ok_or(MoneyError::Overflow)?;
            lines.push(StatementLine {
                play_name: play.name.clone(),
                audience: performance.audience,
                amount,
                volume_credits,
            });
        }

        tracing::debug!(
            lines = lines.len(),
            total_minor,
            volume_credits = total_volume_credits,
            "Statement built"
        );

        Ok(Statement {
            customer: invoice.customer.clone(),
            currency: self.pricing.currency(),
            lines,
            total_minor,
            total_volume_credits,
        })
    }
}

/// Builds and renders the default plain-text statement
///
/// Uses Korean labels with en-US dollar formatting:
///
/// ```text
/// 청구 내역(고객명: BigCo)
/// Hamlet: $650.00 (55석)
/// 총액: $650.00
/// 적립 포인트: 25점
/// ```
///
/// # Errors
///
/// Returns the first lookup, pricing, or rendering failure; no partial
/// statement is produced.
pub fn statement(invoice: &Invoice, plays: &PlayCatalog) -> Result<String, StatementError> {
    let statement = StatementBuilder::new(plays).build(invoice)?;
    PlainTextRenderer::new(RenderOptions::default()).render(&statement)
}
