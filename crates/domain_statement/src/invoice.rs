//! Invoices and performances
//!
//! An invoice lists, in order, the performances staged for one customer.
//! Inputs are immutable once constructed; audience sizes are validated at
//! construction and during deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StatementError;
use crate::play::PlayId;

/// Number of seats sold for a performance
///
/// Always non-negative. Deserializes from any JSON integer and rejects
/// negative or out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Audience(u32);

impl Audience {
    pub const fn new(seats: u32) -> Self {
        Self(seats)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Seats beyond `threshold`, or zero
    pub fn excess_over(&self, threshold: u32) -> u32 {
        self.0.saturating_sub(threshold)
    }
}

impl TryFrom<i64> for Audience {
    type Error = StatementError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| StatementError::InvalidAudience(value))
    }
}

impl From<Audience> for u32 {
    fn from(audience: Audience) -> Self {
        audience.0
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One staging of a play within an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: Audience,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: Audience) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }

    /// Creates a performance from a raw seat count
    ///
    /// # Errors
    ///
    /// Returns `StatementError::InvalidAudience` for negative counts
    pub fn try_new(play_id: impl Into<PlayId>, audience: i64) -> Result<Self, StatementError> {
        Ok(Self::new(play_id, Audience::try_from(audience)?))
    }
}

/// A customer's invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            performances: Vec::new(),
        }
    }

    /// Appends a performance, keeping invoice order
    pub fn with_performance(mut self, performance: Performance) -> Self {
        self.performances.push(performance);
        self
    }
}
