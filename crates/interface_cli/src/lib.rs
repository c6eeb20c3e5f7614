//! Statement command-line interface
//!
//! Wires configuration, data loading and logging around the statement
//! domain. The `theater-statement` binary is a thin wrapper over [`app::run`].
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{app, config::StatementConfig};
//!
//! let config = StatementConfig::from_env()?;
//! print!("{}", app::run(&config)?);
//! ```

pub mod app;
pub mod config;
pub mod loader;
pub mod telemetry;

pub use config::{OutputFormat, StatementConfig};
pub use loader::LoadError;
