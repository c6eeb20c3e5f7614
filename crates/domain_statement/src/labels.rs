//! Localized statement labels
//!
//! Labels are Fluent messages compiled into the crate. A fresh bundle is
//! created for each render.

use fluent::{FluentArgs, FluentBundle, FluentResource};
use unic_langid::LanguageIdentifier;

use core_kernel::Locale;

use crate::error::StatementError;

const KO_KR: &str = r#"
statement-header = 청구 내역(고객명: { $customer })
statement-line = { $play }: { $amount } ({ $audience }석)
statement-total = 총액: { $amount }
statement-credits = 적립 포인트: { $credits }점
html-header = 청구 내역 (고객명: { $customer })
html-column-play = 연극
html-column-seats = 좌석 수
html-column-amount = 금액
html-seats = ({ $audience }석)
html-total = 총액: <em>{ $amount }</em>
html-credits = 적립 포인트: <em>{ $credits }</em>점
"#;

const EN_US: &str = r#"
statement-header = Statement for { $customer }
statement-line = { $play }: { $amount } ({ $audience } seats)
statement-total = Amount owed is { $amount }
statement-credits = You earned { $credits } credits
html-header = Statement for { $customer }
html-column-play = play
html-column-seats = seats
html-column-amount = cost
html-seats = { $audience }
html-total = Amount owed is <em>{ $amount }</em>
html-credits = You earned <em>{ $credits }</em> credits
"#;

const DE_DE: &str = r#"
statement-header = Abrechnung für { $customer }
statement-line = { $play }: { $amount } ({ $audience } Plätze)
statement-total = Gesamtbetrag: { $amount }
statement-credits = Treuepunkte: { $credits }
html-header = Abrechnung für { $customer }
html-column-play = Stück
html-column-seats = Plätze
html-column-amount = Betrag
html-seats = { $audience }
html-total = Gesamtbetrag: <em>{ $amount }</em>
html-credits = Treuepunkte: <em>{ $credits }</em>
"#;

/// Message lookup for one locale
pub struct StatementLabels {
    bundle: FluentBundle<FluentResource>,
}

impl StatementLabels {
    /// Loads the labels for `locale`
    ///
    /// # Errors
    ///
    /// Returns `StatementError::Render` if the bundled resources fail to parse
    pub fn for_locale(locale: Locale) -> Result<Self, StatementError> {
        let source = match locale {
            Locale::KoKr => KO_KR,
            Locale::EnUs => EN_US,
            Locale::DeDe => DE_DE,
        };

        let langid: LanguageIdentifier = locale
            .language_tag()
            .parse()
            .map_err(|err| StatementError::render(format!("invalid language tag {locale}: {err}")))?;

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            StatementError::render(format!("failed to parse {locale} labels: {errors:?}"))
        })?;

        let mut bundle = FluentBundle::new(vec![langid]);
        // Isolation marks would leak into plain text output
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            StatementError::render(format!("failed to load {locale} labels: {errors:?}"))
        })?;

        Ok(Self { bundle })
    }

    /// Formats message `id` with `args`
    ///
    /// # Errors
    ///
    /// Returns `StatementError::Render` if the message is missing or a
    /// referenced argument was not supplied
    pub fn format(&self, id: &str, args: &FluentArgs) -> Result<String, StatementError> {
        let message = self
            .bundle
            .get_message(id)
            .ok_or_else(|| StatementError::render(format!("missing label: {id}")))?;
        let pattern = message
            .value()
            .ok_or_else(|| StatementError::render(format!("label has no value: {id}")))?;

        let mut errors = Vec::new();
        let text = self.bundle.format_pattern(pattern, Some(args), &mut errors);
        if !errors.is_empty() {
            return Err(StatementError::render(format!("failed to format {id}: {errors:?}")));
        }
        Ok(text.into_owned())
    }

    /// Formats a message that takes no arguments
    pub fn text(&self, id: &str) -> Result<String, StatementError> {
        self.format(id, &FluentArgs::new())
    }
}
