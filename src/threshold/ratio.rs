//! Threshold sensitivity ratio with an exact comparison rule.
//!
//! A finite `f64` is exactly `mantissa * 2^exponent` for integers
//! `mantissa < 2^53` and `-1074 <= exponent <= 971`. [`Ratio::is_exceeded_by`]
//! uses that decomposition to compare `lhs > sum * ratio` with 128-bit
//! integers, so the decision never depends on how the product rounds.

use crate::utils::error::{AnalysisError, Result};

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1075;

/// Local-mean sensitivity used by the adaptive threshold.
///
/// `1.0` compares a pixel against the plain local mean; smaller values mark
/// more pixels as foreground, larger values fewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio {
    value: f64,
    mantissa: u64,
    exponent: i32,
}

impl Ratio {
    /// Validates `value` and captures its exact binary form.
    ///
    /// Negative, NaN and infinite values are rejected.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AnalysisError::InvalidRatio(value));
        }
        let bits = value.to_bits();
        let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << MANTISSA_BITS) - 1);
        let (mantissa, exponent) = if biased == 0 {
            // Zero and subnormals carry no implicit leading bit.
            (fraction, 1 - EXPONENT_BIAS)
        } else {
            (fraction | (1u64 << MANTISSA_BITS), biased - EXPONENT_BIAS)
        };
        Ok(Ratio {
            value,
            mantissa,
            exponent,
        })
    }

    /// Builds a ratio from a whole percentage, e.g. a slider position.
    pub fn from_percent(percent: u32) -> Self {
        let value = percent as f64 / 100.0;
        // A non-negative finite quotient always validates.
        match Ratio::new(value) {
            Ok(ratio) => ratio,
            Err(_) => unreachable!("percentage ratio {value} is finite and non-negative"),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `true` when `lhs > sum * ratio` holds exactly.
    pub fn is_exceeded_by(&self, lhs: u64, sum: u64) -> bool {
        let rhs = sum as u128 * self.mantissa as u128;
        let lhs = lhs as u128;

        if self.exponent >= 0 {
            // rhs * 2^e against lhs; a shift past the top bit is larger than any u64.
            let shift = self.exponent as u32;
            if rhs == 0 {
                return lhs > 0;
            }
            if shift >= rhs.leading_zeros() {
                return false;
            }
            lhs > rhs << shift
        } else {
            // lhs * 2^-e against rhs; rhs stays below 2^117.
            let shift = self.exponent.unsigned_abs();
            if lhs == 0 {
                return false;
            }
            if shift >= lhs.leading_zeros() {
                return true;
            }
            (lhs << shift) > rhs
        }
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::from_percent(100)
    }
}

impl TryFrom<f64> for Ratio {
    type Error = AnalysisError;

    fn try_from(value: f64) -> Result<Self> {
        Ratio::new(value)
    }
}
