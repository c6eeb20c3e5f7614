//! Pre-built Test Fixtures
//!
//! Provides ready-to-use plays, catalogs, and invoices. The sample data
//! matches the bundled `invoices.json` / `plays.json`.

use core_kernel::{Currency, Money};
use domain_statement::{Audience, Invoice, Performance, Play, PlayCatalog};
use rust_decimal_macros::dec;

/// Fixture for play catalog data
pub struct PlayFixtures;

impl PlayFixtures {
    pub fn hamlet() -> Play {
        Play::new("Hamlet", "tragedy")
    }

    pub fn as_you_like_it() -> Play {
        Play::new("As You Like It", "comedy")
    }

    pub fn othello() -> Play {
        Play::new("Othello", "tragedy")
    }

    /// A play whose genre has no pricing rule
    pub fn henry_v() -> Play {
        Play::new("Henry V", "history")
    }

    /// The standard three-play catalog
    pub fn catalog() -> PlayCatalog {
        PlayCatalog::new()
            .with_play("hamlet", Self::hamlet())
            .with_play("as-like", Self::as_you_like_it())
            .with_play("othello", Self::othello())
    }

    /// The standard catalog plus an unsupported genre under `henry-v`
    pub fn catalog_with_history() -> PlayCatalog {
        Self::catalog().with_play("henry-v", Self::henry_v())
    }
}

/// Fixture for invoice data
pub struct InvoiceFixtures;

impl InvoiceFixtures {
    /// BigCo's invoice: Hamlet (55), As You Like It (35), Othello (40)
    pub fn big_co() -> Invoice {
        Invoice::new("BigCo")
            .with_performance(Performance::new("hamlet", Audience::new(55)))
            .with_performance(Performance::new("as-like", Audience::new(35)))
            .with_performance(Performance::new("othello", Audience::new(40)))
    }

    /// Expected total for [`InvoiceFixtures::big_co`]
    pub fn big_co_total() -> Money {
        Money::new(dec!(1730.00), Currency::USD)
    }

    /// Expected credits for [`InvoiceFixtures::big_co`]
    pub fn big_co_credits() -> u64 {
        47
    }

    /// Expected default text statement for [`InvoiceFixtures::big_co`]
    pub fn big_co_text() -> &'static str {
        "청구 내역(고객명: BigCo)\n\
         Hamlet: $650.00 (55석)\n\
         As You Like It: $580.00 (35석)\n\
         Othello: $500.00 (40석)\n\
         총액: $1,730.00\n\
         적립 포인트: 47점\n"
    }

    /// An invoice with no performances
    pub fn empty() -> Invoice {
        Invoice::new("Nobody")
    }
}
