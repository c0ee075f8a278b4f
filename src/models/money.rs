//! Money type for account balances
//!
//! Balances are whole amounts in the account's minor unit, backed by a
//! [`Decimal`] so they are not limited to 64 bits. On the wire a balance is a
//! plain JSON integer. No currency is attached.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Reasons a string is not a valid amount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("Invalid amount: {0}")]
    Invalid(String),

    #[error("Amount must be a whole number of minor units: {0}")]
    Fractional(String),
}

/// A monetary amount: a signed whole count of minor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use nestegg::models::Money;
    /// let amount = Money::new(1050);
    /// assert_eq!(amount.to_string(), "1050");
    /// ```
    pub fn new(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = if s.contains(['e', 'E']) {
            Decimal::from_scientific(s)
        } else {
            Decimal::from_str_exact(s)
        }
        .map_err(|_| ParseMoneyError::Invalid(s.to_string()))?;

        if !parsed.fract().is_zero() {
            return Err(ParseMoneyError::Fractional(s.to_string()));
        }

        Ok(Self(parsed.normalize()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// serde_json is built with `arbitrary_precision`, so a `Number` carries the
// literal digits in both directions.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&self.0.to_string()).map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        number.to_string().parse().map_err(D::Error::custom)
    }
}
