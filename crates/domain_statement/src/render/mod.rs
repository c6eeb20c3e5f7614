//! Statement renderers
//!
//! A renderer turns a built [`Statement`] into text. Both renderers create
//! their money formatter and label bundle per call, so a renderer can be
//! shared freely between threads rendering different statements.

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::PlainTextRenderer;

use serde::{Deserialize, Serialize};

use core_kernel::{Locale, MoneyFormatter};

use crate::error::StatementError;
use crate::labels::StatementLabels;
use crate::statement::Statement;

/// Renders a statement to a string
pub trait StatementRenderer {
    fn render(&self, statement: &Statement) -> Result<String, StatementError>;
}

/// Display settings shared by all renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Language of the statement labels
    pub language: Locale,
    /// Locale used for currency formatting
    pub number_locale: Locale,
    /// Fixed fraction digits for amounts
    pub fraction_digits: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: Locale::KoKr,
            number_locale: Locale::EnUs,
            fraction_digits: 2,
        }
    }
}

impl RenderOptions {
    pub(crate) fn money_formatter(&self, statement: &Statement) -> MoneyFormatter {
        MoneyFormatter::new(self.number_locale, statement.currency())
            .with_fraction_digits(self.fraction_digits)
    }

    pub(crate) fn labels(&self) -> Result<StatementLabels, StatementError> {
        StatementLabels::for_locale(self.language)
    }
}
