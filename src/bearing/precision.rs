//! Rounding of computed angles to a number of decimal places

use log::trace;
use serde::{Deserialize, Serialize};

/// How many decimal places a computed bearing keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Precision {
    /// Infer the decimal count from the value's own shortest decimal
    /// representation. Kept for callers that relied on omitting the
    /// precision argument; new code should pass [`Precision::Digits`].
    /// Rust's `Display` never switches to exponent notation, so values
    /// below 1e-6 count their full decimal expansion rather than the
    /// characters of an exponent form like `1e-7`.
    #[default]
    Legacy,
    /// Round half to even at this many decimal places
    Digits(u32),
}

impl From<u32> for Precision {
    fn from(digits: u32) -> Self {
        Precision::Digits(digits)
    }
}

impl From<Option<u32>> for Precision {
    fn from(digits: Option<u32>) -> Self {
        digits.map_or(Precision::Legacy, Precision::Digits)
    }
}

impl Precision {
    /// Rounds `value` according to this precision
    ///
    /// Integer-valued and non-finite inputs are returned unchanged.
    pub fn apply(self, value: f64) -> f64 {
        if !value.is_finite() || value == value.floor() {
            return value;
        }

        let digits = match self {
            Precision::Digits(digits) => digits,
            Precision::Legacy => {
                let inferred = decimal_places(value);
                trace!("inferred {} decimal places from {}", inferred, value);
                inferred
            }
        };

        round_half_even(value, digits)
    }
}

/// Number of digits after the decimal point in the shortest representation
/// that round-trips to `value`
pub fn decimal_places(value: f64) -> u32 {
    let repr = value.to_string();
    repr.split_once('.')
        .map_or(0, |(_, decimals)| decimals.len() as u32)
}

/// Rounds to `digits` decimal places, ties to even
pub fn round_half_even(value: f64, digits: u32) -> f64 {
    // 10^23 and beyond no longer fit exactly in an f64; every f64 is
    // already "rounded" at that scale
    if digits > 22 {
        return value;
    }

    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    scaled.round_ties_even() / factor
}
