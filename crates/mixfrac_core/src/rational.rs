//! Exact rational value of a fraction
//!
//! `Rational` is always stored in lowest terms with a positive denominator, so
//! derived equality is value equality. [`Fraction`] compares and classifies values
//! through it, and builds canonical mixed form from it.
//!
//! [`Fraction`]: crate::Fraction

use crate::error::{FractionError, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;

/// Exact rational number (numerator / denominator), always reduced
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Create a reduced rational; a zero denominator is rejected
    pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Self> {
        let den = den.into();
        if den.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self::reduced(num.into(), den))
    }

    /// Create zero
    pub fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    /// Signed numerator in lowest terms
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Always positive
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Check if this rational is zero
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Check if this rational is below zero
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Split into `(floor, remainder numerator, denominator)` with
    /// `0 <= remainder < denominator`, so `self == floor + remainder / denominator`.
    pub fn to_mixed_parts(&self) -> (BigInt, BigInt, BigInt) {
        let (integer, rem) = self.numerator.div_mod_floor(&self.denominator);
        (integer, rem, self.denominator.clone())
    }

    /// Reduce to lowest terms. Callers guarantee a non-zero denominator.
    pub(crate) fn reduced(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        if numerator.is_zero() {
            return Self::zero();
        }

        let g = numerator.gcd(&denominator);
        numerator = &numerator / &g;
        denominator = &denominator / &g;

        // Ensure denominator is positive
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        Self {
            numerator,
            denominator,
        }
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the direction.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
