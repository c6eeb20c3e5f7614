//! Test Data Builders
//!
//! Builders that let tests specify only the relevant fields while using
//! defaults for everything else.

use domain_statement::{Audience, Genre, Invoice, Performance, Play, PlayCatalog, PlayId};

/// Builder for an invoice together with the catalog it prices against
///
/// Each added performance registers its own play, so the pair always
/// resolves unless a test adds a dangling reference explicitly.
pub struct TestInvoiceBuilder {
    customer: String,
    performances: Vec<Performance>,
    catalog: PlayCatalog,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// Creates a new builder for customer "TestCo"
    pub fn new() -> Self {
        Self {
            customer: "TestCo".to_string(),
            performances: Vec::new(),
            catalog: PlayCatalog::new(),
        }
    }

    /// Sets the customer name
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = customer.into();
        self
    }

    /// Adds a performance of a freshly registered play of `genre`
    pub fn with_performance(mut self, genre: impl Into<Genre>, audience: u32) -> Self {
        let genre = genre.into();
        let index = self.performances.len();
        let id = PlayId::new(format!("play-{index}"));
        let name = format!("{} #{index}", genre.as_str());

        self.catalog.insert(id.clone(), Play::new(name, genre));
        self.performances.push(Performance::new(id, Audience::new(audience)));
        self
    }

    /// Adds a performance of a play missing from the catalog
    pub fn with_missing_play(mut self, play_id: &str, audience: u32) -> Self {
        self.performances
            .push(Performance::new(play_id, Audience::new(audience)));
        self
    }

    /// Builds the invoice and its catalog
    pub fn build(self) -> (Invoice, PlayCatalog) {
        let invoice = Invoice {
            customer: self.customer,
            performances: self.performances,
        };
        (invoice, self.catalog)
    }
}
