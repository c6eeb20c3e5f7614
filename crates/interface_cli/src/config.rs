//! CLI configuration
//!
//! Values are layered, lowest priority first: built-in defaults, an optional
//! `statement.toml` in the working directory, then `STATEMENT_*` environment
//! variables (e.g. `STATEMENT_FORMAT=html`).

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use core_kernel::{Currency, Locale};
use domain_statement::RenderOptions;

/// Output format of the rendered statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Statement printer configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatementConfig {
    /// JSON array of invoices
    pub invoices_path: PathBuf,
    /// JSON object of plays keyed by id
    pub plays_path: PathBuf,
    /// Which invoice of the array to print
    pub invoice_index: usize,
    /// Output format
    pub format: OutputFormat,
    /// Label language
    pub language: Locale,
    /// Locale for currency formatting
    pub number_locale: Locale,
    /// Pricing currency; charges are hundredths of it
    pub currency: Currency,
    /// Fraction digits shown for amounts
    pub fraction_digits: u32,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            invoices_path: PathBuf::from("data/invoices.json"),
            plays_path: PathBuf::from("data/plays.json"),
            invoice_index: 0,
            format: OutputFormat::Text,
            language: Locale::KoKr,
            number_locale: Locale::EnUs,
            currency: Currency::USD,
            fraction_digits: 2,
            log_level: "info".to_string(),
        }
    }
}

impl StatementConfig {
    /// Loads configuration from `statement.toml` and the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("statement").required(false))
                .add_source(Environment::with_prefix("STATEMENT").try_parsing(true)),
        )
    }

    /// Resolves configuration from `builder`, filling unset keys with defaults
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("invoices_path", "data/invoices.json")?
            .set_default("plays_path", "data/plays.json")?
            .set_default("invoice_index", 0i64)?
            .set_default("format", "text")?
            .set_default("language", Locale::KoKr.language_tag())?
            .set_default("number_locale", Locale::EnUs.language_tag())?
            .set_default("currency", Currency::USD.code())?
            .set_default("fraction_digits", 2i64)?
            .set_default("log_level", "info")?
            .build()?
            .try_deserialize()
    }

    /// Render settings derived from this configuration
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            language: self.language,
            number_locale: self.number_locale,
            fraction_digits: self.fraction_digits,
        }
    }
}
