//! Performance pricing and loyalty credits
//!
//! Charges are integers in minor currency units. Each supported genre has
//! exactly one charge rule and one credit rule; unsupported genres fail
//! pricing instead of falling through to a default.
//!
//! | Genre   | Base  | Threshold | Excess charge                      | Per seat |
//! |---------|-------|-----------|------------------------------------|----------|
//! | tragedy | 40000 | 30        | 1000 × (audience − 30)             | 0        |
//! | comedy  | 30000 | 20        | 10000 + 500 × (audience − 20)      | 300      |
//!
//! Credits are `max(audience − 30, 0)`, plus `audience / 5` for comedies.
//!
//! Charges are hundredths of the pricing currency, so only currencies with
//! two decimal places can price.

use core_kernel::{Currency, Money};

use crate::error::StatementError;
use crate::invoice::{Audience, Performance};
use crate::play::{Genre, Play};

const TRAGEDY_BASE: i64 = 40_000;
const TRAGEDY_THRESHOLD: u32 = 30;
const TRAGEDY_PER_EXCESS_SEAT: i64 = 1_000;

const COMEDY_BASE: i64 = 30_000;
const COMEDY_THRESHOLD: u32 = 20;
const COMEDY_EXCESS_FLAT: i64 = 10_000;
const COMEDY_PER_EXCESS_SEAT: i64 = 500;
const COMEDY_PER_SEAT: i64 = 300;

const CHARGE_DECIMAL_PLACES: u32 = 2;

const CREDIT_THRESHOLD: u32 = 30;
const COMEDY_SEATS_PER_BONUS_CREDIT: u32 = 5;

/// Charge for one performance in minor currency units
///
/// # Errors
///
/// Returns `StatementError::UnknownGenre` for genres without a pricing rule
pub fn charge_minor(genre: &Genre, audience: Audience) -> Result<i64, StatementError> {
    let seats = i64::from(audience.get());
    match genre {
        Genre::Tragedy => {
            let mut amount = TRAGEDY_BASE;
            if audience.get() > TRAGEDY_THRESHOLD {
                amount += TRAGEDY_PER_EXCESS_SEAT * i64::from(audience.excess_over(TRAGEDY_THRESHOLD));
            }
            Ok(amount)
        }
        Genre::Comedy => {
            let mut amount = COMEDY_BASE;
            if audience.get() > COMEDY_THRESHOLD {
                amount += COMEDY_EXCESS_FLAT
                    + COMEDY_PER_EXCESS_SEAT * i64::from(audience.excess_over(COMEDY_THRESHOLD));
            }
            amount += COMEDY_PER_SEAT * seats;
            Ok(amount)
        }
        Genre::Unsupported(other) => Err(StatementError::UnknownGenre(other.clone())),
    }
}

/// Loyalty credits earned by one performance
pub fn volume_credits(genre: &Genre, audience: Audience) -> u64 {
    let mut credits = u64::from(audience.excess_over(CREDIT_THRESHOLD));
    if *genre == Genre::Comedy {
        credits += u64::from(audience.get() / COMEDY_SEATS_PER_BONUS_CREDIT);
    }
    credits
}

/// Prices performances into [`Money`] of a fixed currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingService {
    currency: Currency,
}

impl Default for PricingService {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
        }
    }
}

impl PricingService {
    /// Creates a service pricing in `currency`
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnsupportedCurrency` unless the currency's
    /// minor unit is a hundredth (USD, EUR, GBP)
    pub fn new(currency: Currency) -> Result<Self, StatementError> {
        if currency.decimal_places() != CHARGE_DECIMAL_PLACES {
            return Err(StatementError::UnsupportedCurrency(currency.code().to_string()));
        }
        Ok(Self { currency })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Charge for a performance of `play`, in hundredths of the currency
    ///
    /// # Errors
    ///
    /// Returns `StatementError::UnknownGenre` if the play's genre is not priced
    pub fn charge_for(&self, performance: &Performance, play: &Play) -> Result<i64, StatementError> {
        charge_minor(&play.genre, performance.audience).map_err(|err| {
            tracing::warn!(play = %play.name, genre = %play.genre, "No pricing rule for genre");
            err
        })
    }

    /// Lifts a charge into [`Money`] of the pricing currency
    pub fn money(&self, charge: i64) -> Money {
        Money::from_minor(charge, self.currency)
    }

    /// Computes the loyalty credits for a performance of `play`
    pub fn volume_credits_for(&self, performance: &Performance, play: &Play) -> u64 {
        volume_credits(&play.genre, performance.audience)
    }
}
