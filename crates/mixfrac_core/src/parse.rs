//! Reading fractions from text
//!
//! Accepts the shapes written by `Display`:
//! - `"I N/D"` mixed number
//! - `"N/D"` fraction with a zero integer part
//! - `"I"` whole number, read as `I 0/1`
//!
//! Each number is plain decimal digits with an optional leading `-`. The parts are
//! taken verbatim under the floored sign convention, so `"-2 1/2"` is minus one and a
//! half, and `"-0 1/2"` is the same as `"1/2"`.

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;
use num_bigint::BigInt;
use num_traits::Zero;
use std::str::FromStr;

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        let fail = |reason| FractionError::Parse {
            input: s.to_string(),
            reason,
        };

        let mut tokens = s.split_whitespace();
        let (integer, fraction) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(frac), None, None) if frac.contains('/') => (None, Some(frac)),
            (Some(int), None, None) => (Some(int), None),
            (Some(int), Some(frac), None) => (Some(int), Some(frac)),
            (None, _, _) => return Err(fail("empty input")),
            _ => return Err(fail("expected at most an integer part and a fraction part")),
        };

        let integer = match integer {
            Some(text) => parse_int(text).ok_or_else(|| fail("integer part is not a number"))?,
            None => BigInt::zero(),
        };

        let Some(fraction) = fraction else {
            return Ok(Fraction::from_integer(integer));
        };

        let (numerator, denominator) = fraction
            .split_once('/')
            .ok_or_else(|| fail("fraction part must be `numerator/denominator`"))?;
        let numerator = parse_int(numerator).ok_or_else(|| fail("numerator is not a number"))?;
        let denominator =
            parse_int(denominator).ok_or_else(|| fail("denominator is not a number"))?;

        Fraction::new(integer, numerator, denominator)
    }
}

/// `-?[0-9]+` only; `parse_bytes` alone would also take `+` and `_` separators
fn parse_int(text: &str) -> Option<BigInt> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(text.as_bytes(), 10)
}
