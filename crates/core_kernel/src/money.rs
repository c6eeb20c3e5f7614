//! Money types with precise decimal arithmetic
//!
//! Charges are priced in integer minor units (cents) and lifted into [`Money`]
//! for accumulation and display. `rust_decimal` keeps the conversion exact.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Billing currency
///
/// Serialized as its ISO 4217 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    KRW,
}

impl Currency {
    /// Digits in one minor unit (2 for cents, 0 for won and yen)
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY | Currency::KRW => 0,
            _ => 2,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::KRW => "₩",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::KRW => "KRW",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Overflow during calculation")]
    Overflow,

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

/// An exact amount in one currency
///
/// Amounts are kept to four decimal places; display rounding is left to
/// [`crate::MoneyFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Lifts an integer charge in minor units, so `65000` USD is `$650.00`
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        let divisor = Decimal::new(10_i64.pow(currency.decimal_places()), 0);
        Self::new(Decimal::new(minor_units, 0) / divisor, currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the amount in minor units, rounded half away from zero
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the value does not fit in an `i64`
    pub fn to_minor(&self) -> Result<i64, MoneyError> {
        let factor = Decimal::new(10_i64.pow(self.currency.decimal_places()), 0);
        self.amount
            .checked_mul(factor)
            .map(|minor| minor.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|minor| minor.to_i64())
            .ok_or(MoneyError::Overflow)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Adds two amounts of the same currency
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` when currencies differ, `Overflow` past `Decimal::MAX`
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_and_won() {
        assert_eq!(Money::from_minor(65000, Currency::USD).amount(), dec!(650.00));
        assert_eq!(Money::from_minor(65000, Currency::KRW).amount(), dec!(65000));
    }

    #[test]
    fn test_money_to_minor() {
        let m = Money::new(dec!(1730.00), Currency::USD);
        assert_eq!(m.to_minor().unwrap(), 173000);
    }

    #[test]
    fn test_adding_won_to_dollars_fails() {
        let dollars = Money::from_minor(65000, Currency::USD);
        let won = Money::from_minor(65000, Currency::KRW);

        assert_eq!(
            dollars.checked_add(&won),
            Err(MoneyError::CurrencyMismatch("USD".into(), "KRW".into()))
        );
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::new(Decimal::MAX, Currency::USD);
        assert_eq!(max.checked_add(&max), Err(MoneyError::Overflow));
    }
}
