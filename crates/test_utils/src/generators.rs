//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_statement::{Audience, Genre, Invoice, PlayCatalog};
use proptest::prelude::*;

use crate::builders::TestInvoiceBuilder;

/// Strategy for generating audience sizes (0 to 1000 seats)
pub fn audience_strategy() -> impl Strategy<Value = Audience> {
    (0u32..=1000u32).prop_map(Audience::new)
}

/// Strategy for generating the supported genres
pub fn supported_genre_strategy() -> impl Strategy<Value = Genre> {
    prop_oneof![Just(Genre::Tragedy), Just(Genre::Comedy)]
}

/// Strategy for generating genres that have no pricing rule
pub fn unsupported_genre_strategy() -> impl Strategy<Value = Genre> {
    "[a-z]{3,12}"
        .prop_filter("must not be a supported genre", |s| s != "tragedy" && s != "comedy")
        .prop_map(Genre::Unsupported)
}

/// Strategy for generating negative raw audience values
pub fn negative_audience_strategy() -> impl Strategy<Value = i64> {
    i64::MIN..0i64
}

/// Strategy for generating customer names
pub fn customer_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}(Co)?"
}

/// Strategy for generating a priceable invoice and its catalog
///
/// Every performance resolves and uses a supported genre.
pub fn priceable_invoice_strategy() -> impl Strategy<Value = (Invoice, PlayCatalog)> {
    (
        customer_strategy(),
        proptest::collection::vec((supported_genre_strategy(), 0u32..=1000u32), 0..12),
    )
        .prop_map(|(customer, performances)| {
            performances
                .into_iter()
                .fold(
                    TestInvoiceBuilder::new().with_customer(customer),
                    |builder, (genre, audience)| builder.with_performance(genre, audience),
                )
                .build()
        })
}
