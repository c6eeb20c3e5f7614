//! Locale-aware currency formatting
//!
//! [`MoneyFormatter`] is a small value configured once per render with a
//! locale, a currency and a fixed number of fraction digits. It holds no
//! global state and is cheap to construct.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::{Currency, Money, MoneyError};

/// No-break space used between an amount and a trailing symbol
const NBSP: char = '\u{a0}';

/// Supported display locales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "ko-KR")]
    KoKr,
    #[serde(rename = "de-DE")]
    DeDe,
}

/// Where the currency symbol is placed relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

impl Locale {
    /// Returns the BCP 47 language tag
    pub fn language_tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::KoKr => "ko-KR",
            Locale::DeDe => "de-DE",
        }
    }

    /// Thousands separator
    pub fn grouping_separator(&self) -> char {
        match self {
            Locale::EnUs | Locale::KoKr => ',',
            Locale::DeDe => '.',
        }
    }

    /// Decimal separator
    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs | Locale::KoKr => '.',
            Locale::DeDe => ',',
        }
    }

    pub fn symbol_position(&self) -> SymbolPosition {
        match self {
            Locale::EnUs | Locale::KoKr => SymbolPosition::Prefix,
            Locale::DeDe => SymbolPosition::Suffix,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language_tag())
    }
}

impl FromStr for Locale {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" => Ok(Locale::EnUs),
            "ko-KR" => Ok(Locale::KoKr),
            "de-DE" => Ok(Locale::DeDe),
            other => Err(MoneyError::UnsupportedLocale(other.to_string())),
        }
    }
}

/// Formats [`Money`] values for display
///
/// # Example
///
/// ```rust
/// use core_kernel::{Currency, Locale, Money, MoneyFormatter};
///
/// let format = MoneyFormatter::new(Locale::EnUs, Currency::USD);
/// let text = format.format(&Money::from_minor(173000, Currency::USD)).unwrap();
/// assert_eq!(text, "$1,730.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFormatter {
    locale: Locale,
    currency: Currency,
    fraction_digits: u32,
}

impl MoneyFormatter {
    /// Creates a formatter using the currency's standard decimal places
    pub fn new(locale: Locale, currency: Currency) -> Self {
        Self {
            locale,
            currency,
            fraction_digits: currency.decimal_places(),
        }
    }

    /// Overrides the number of fraction digits (capped at 28)
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits.min(28);
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }

    /// Formats a money value
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if `money` is not in the
    /// formatter's currency
    pub fn format(&self, money: &Money) -> Result<String, MoneyError> {
        if money.currency() != self.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                money.currency().to_string(),
            ));
        }

        let dp = self.fraction_digits;
        let rounded = money
            .amount()
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = format!("{:.dp$}", rounded.abs(), dp = dp as usize);

        let (integer, fraction) = match plain.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (plain.as_str(), None),
        };

        let mut number = group_digits(integer, self.locale.grouping_separator());
        if let Some(fraction) = fraction {
            number.push(self.locale.decimal_separator());
            number.push_str(fraction);
        }

        let sign = if negative { "-" } else { "" };
        let symbol = self.currency.symbol();
        Ok(match self.locale.symbol_position() {
            SymbolPosition::Prefix => format!("{sign}{symbol}{number}"),
            SymbolPosition::Suffix => format!("{sign}{number}{NBSP}{symbol}"),
        })
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_locale_round_trips_through_str() {
        for locale in [Locale::EnUs, Locale::KoKr, Locale::DeDe] {
            assert_eq!(locale.language_tag().parse::<Locale>().unwrap(), locale);
        }
        assert!("fr-FR".parse::<Locale>().is_err());
    }
}
