//! Statement Domain
//!
//! Prices a customer's invoice of theatrical performances against a play
//! catalog and renders the result as a human-readable statement.
//!
//! # Flow
//!
//! ```text
//! Invoice + PlayCatalog -> StatementBuilder -> Statement -> StatementRenderer -> String
//! ```
//!
//! Pricing is pure and per performance: each supported [`Genre`] has one
//! charge rule and one loyalty-credit rule, and an unsupported genre or an
//! unknown play id aborts the whole statement.
//!
//! # Example
//!
//! ```rust
//! use domain_statement::{statement, Audience, Invoice, Performance, Play, PlayCatalog};
//!
//! let plays = PlayCatalog::new().with_play("hamlet", Play::new("Hamlet", "tragedy"));
//! let invoice = Invoice::new("BigCo")
//!     .with_performance(Performance::new("hamlet", Audience::new(55)));
//!
//! let text = statement(&invoice, &plays).unwrap();
//! assert!(text.contains("Hamlet: $650.00 (55석)"));
//! ```

pub mod error;
pub mod invoice;
pub mod labels;
pub mod play;
pub mod pricing;
pub mod render;
pub mod statement;

pub use error::StatementError;
pub use invoice::{Audience, Invoice, Performance};
pub use labels::StatementLabels;
pub use play::{Genre, Play, PlayCatalog, PlayId};
pub use pricing::{charge_minor, volume_credits, PricingService};
pub use render::{HtmlRenderer, PlainTextRenderer, RenderOptions, StatementRenderer};
pub use statement::{statement, Statement, StatementBuilder, StatementLine};
