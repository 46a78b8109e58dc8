//! Provides a validated type for deposit amounts.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use thiserror::Error;

/// An error that can occur when parsing operator input into a `DepositAmount`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDepositAmountError {
    /// The input was empty or only whitespace.
    #[error("amount is required")]
    Empty,
    /// The input is not a number (e.g., "abc", "1.2.3").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The input parsed to NaN or infinity.
    #[error("amount must be a finite number")]
    NotFinite,
    /// Approved amounts may not be negative.
    #[error("amount must not be negative")]
    Negative,
}

/// The amount of a deposit, in units of the deposit's coin.
///
/// The backend stores amounts as plain JSON numbers, so this wraps an `f64`.
/// Any value read from the wire is guaranteed finite; values produced by
/// [`DepositAmount::from_str`] are additionally guaranteed non-negative,
/// which is what the approve call requires.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DepositAmount(f64);

impl DepositAmount {
    /// Creates an amount from a float. Returns `None` for NaN or infinity.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Checks the approve-time invariant.
    pub fn ensure_approvable(self) -> Result<Self, ParseDepositAmountError> {
        if self.is_negative() {
            Err(ParseDepositAmountError::Negative)
        } else {
            Ok(self)
        }
    }
}

/// Parses operator input from the amount field of the approval dialog.
///
/// # Examples
/// ```
/// use api::models::amount::{DepositAmount, ParseDepositAmountError};
///
/// let amount: DepositAmount = " 150.5 ".parse().unwrap();
/// assert_eq!(amount.value(), 150.5);
///
/// assert_eq!("-1".parse::<DepositAmount>(), Err(ParseDepositAmountError::Negative));
/// ```
impl FromStr for DepositAmount {
    type Err = ParseDepositAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDepositAmountError::Empty);
        }
        let value: f64 = s
            .parse()
            .map_err(|_| ParseDepositAmountError::InvalidFormat)?;
        Self::new(value)
            .ok_or(ParseDepositAmountError::NotFinite)?
            .ensure_approvable()
    }
}

impl<'de> Deserialize<'de> for DepositAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Some backend records carry the amount as a numeric string.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let value = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => n,
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid amount: {s:?}")))?,
        };
        Self::new(value).ok_or_else(|| serde::de::Error::custom("amount must be finite"))
    }
}

/// Formats the amount the way the operator typed it: no trailing zeros.
impl fmt::Display for DepositAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
