//! Core Kernel - Foundational types for statement pricing
//!
//! This crate provides the building blocks shared by the domain and
//! interface crates:
//! - Money types with precise decimal arithmetic
//! - Locale-aware currency formatting

pub mod money;
pub mod formatting;

pub use money::{Money, Currency, MoneyError};
pub use formatting::{Locale, MoneyFormatter, SymbolPosition};
