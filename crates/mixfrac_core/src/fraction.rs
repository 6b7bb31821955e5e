//! Mixed-number fraction type
//!
//! A [`Fraction`] denotes `integer + numerator / denominator`. The three parts are
//! stored exactly as given, so a fraction may be top-heavy (`numerator >= denominator`)
//! or unreduced until it is simplified.
//!
//! # Sign convention
//!
//! The value formula is taken literally. The numerator is never negative and the
//! denominator is always positive; only the integer part carries a sign. A negative
//! mixed number therefore has a floored integer part: minus one and a half is
//! `Fraction::new(-2, 1, 2)`.
//!
//! # Normal form
//!
//! [`Fraction::simplify`] and every arithmetic operation produce canonical form:
//! `0 <= numerator < denominator` with `gcd(numerator, denominator) == 1`.
//!
//! # Equality and ordering
//!
//! `==` is structural. [`Fraction::same_value`] and [`Fraction::cmp_value`] compare
//! the denoted values. `<` and `>` compare values too, but two different
//! representations of the same value are unordered (`partial_cmp` returns `None`),
//! which keeps `PartialOrd` consistent with the structural `PartialEq`.

use crate::error::{Component, FractionError, Result};
use crate::rational::Rational;
use log::{debug, trace};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Exact mixed number `integer + numerator / denominator`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    integer: BigInt,
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Create a fraction from its three parts, stored verbatim (no reduction).
    ///
    /// Fails with [`FractionError::ZeroDenominator`] for a zero denominator and with
    /// [`FractionError::NegativeComponent`] for a negative numerator or denominator.
    pub fn new(
        integer: impl Into<BigInt>,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self> {
        let integer = integer.into();
        let numerator = numerator.into();
        let denominator = denominator.into();

        if denominator.is_zero() {
            debug!("rejected fraction {integer} {numerator}/0");
            return Err(FractionError::ZeroDenominator);
        }
        if denominator.is_negative() {
            debug!("rejected fraction {integer} {numerator}/{denominator}: negative denominator");
            return Err(FractionError::NegativeComponent {
                component: Component::Denominator,
                value: denominator,
            });
        }
        if numerator.is_negative() {
            debug!("rejected fraction {integer} {numerator}/{denominator}: negative numerator");
            return Err(FractionError::NegativeComponent {
                component: Component::Numerator,
                value: numerator,
            });
        }

        Ok(Self {
            integer,
            numerator,
            denominator,
        })
    }

    /// Whole number `n`, stored as `n 0/1`
    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self {
            integer: n.into(),
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    /// Create zero, `0 0/1`
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// Create one, `1 0/1`
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Whole-number part, the only signed component
    pub fn integer(&self) -> &BigInt {
        &self.integer
    }

    /// Never negative
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Always positive
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Consume into `(integer, numerator, denominator)`
    pub fn into_parts(self) -> (BigInt, BigInt, BigInt) {
        (self.integer, self.numerator, self.denominator)
    }

    /// Top-heavy intermediate used by the arithmetic. The numerator may be negative
    /// here; the denominator must be positive. Always simplified before it escapes.
    fn topheavy_unchecked(numerator: BigInt, denominator: BigInt) -> Self {
        Self {
            integer: BigInt::zero(),
            numerator,
            denominator,
        }
    }

    /// Numerator of the single improper fraction equal to `self` over `self.denominator`
    fn improper_numerator(&self) -> BigInt {
        &self.integer * &self.denominator + &self.numerator
    }

    /// Normalize in place and return `self` for chaining.
    ///
    /// The fractional part is first reduced by the GCD, then any whole units left in
    /// the numerator are folded into the integer part.
    pub fn simplify(&mut self) -> &mut Self {
        // gcd(0, d) == d, so a zero numerator collapses to 0/1
        let g = self.numerator.gcd(&self.denominator);
        if !g.is_one() {
            self.numerator /= &g;
            self.denominator /= &g;
        }

        let (whole, rem) = self.numerator.div_mod_floor(&self.denominator);
        self.integer += whole;
        self.numerator = rem;

        trace!("simplified to {self}");
        self
    }

    /// Pure variant of [`Fraction::simplify`]
    pub fn simplified(&self) -> Self {
        let mut result = self.clone();
        result.simplify();
        result
    }

    /// Fold the integer part into the numerator, giving `0 n/d` with the same
    /// denominator. No GCD reduction is done.
    ///
    /// A negative value has no top-heavy form with a non-negative numerator and fails
    /// with [`FractionError::NegativeTopHeavy`].
    pub fn mixed_to_topheavy(&self) -> Result<Self> {
        let numerator = self.improper_numerator();
        if numerator.is_negative() {
            debug!("{self} is negative, refusing top-heavy form");
            return Err(FractionError::NegativeTopHeavy {
                integer: self.integer.clone(),
                numerator: self.numerator.clone(),
                denominator: self.denominator.clone(),
            });
        }
        Ok(Self::topheavy_unchecked(numerator, self.denominator.clone()))
    }

    /// Split whole units out of the numerator into the integer part, keeping the
    /// denominator. Unlike [`Fraction::simplify`] the fractional part is not reduced.
    pub fn topheavy_to_mixed(&self) -> Self {
        let (whole, rem) = self.numerator.div_rem(&self.denominator);
        Self {
            integer: &self.integer + whole,
            numerator: rem,
            denominator: self.denominator.clone(),
        }
    }

    /// The exact value as a reduced rational
    pub fn to_rational(&self) -> Rational {
        Rational::reduced(self.improper_numerator(), self.denominator.clone())
    }

    /// Compare denoted values regardless of representation
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.to_rational().cmp(&other.to_rational())
    }

    /// True when both fractions denote the same rational number
    pub fn same_value(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }

    /// Check if the denoted value is zero, in any representation
    pub fn is_zero(&self) -> bool {
        self.to_rational().is_zero()
    }

    /// Check if the denoted value is below zero
    pub fn is_negative(&self) -> bool {
        self.to_rational().is_negative()
    }

    /// `0 <= numerator < denominator` and the fractional part is fully reduced
    pub fn is_canonical(&self) -> bool {
        self.numerator < self.denominator && self.numerator.gcd(&self.denominator).is_one()
    }

    /// Integer part is zero and `numerator >= denominator`
    pub fn is_topheavy(&self) -> bool {
        self.integer.is_zero() && self.numerator >= self.denominator
    }

    /// Both improper numerators scaled to `lcm` of the denominators
    fn over_common_denominator(&self, other: &Self) -> (BigInt, BigInt, BigInt) {
        let common = self.denominator.lcm(&other.denominator);
        let lhs = self.improper_numerator() * (&common / &self.denominator);
        let rhs = other.improper_numerator() * (&common / &other.denominator);
        (lhs, rhs, common)
    }

    /// Canonical sum over the LCM of both denominators
    pub fn add(&self, other: &Self) -> Self {
        let (lhs, rhs, common) = self.over_common_denominator(other);
        let mut result = Self::topheavy_unchecked(lhs + rhs, common);
        result.simplify();
        trace!("{self} + {other} = {result}");
        result
    }

    /// Canonical difference; a negative result gets a floored integer part
    pub fn subtract(&self, other: &Self) -> Self {
        let (lhs, rhs, common) = self.over_common_denominator(other);
        let mut result = Self::topheavy_unchecked(lhs - rhs, common);
        result.simplify();
        trace!("{self} - {other} = {result}");
        result
    }

    /// Canonical product of the two improper forms
    pub fn multiply(&self, other: &Self) -> Self {
        let numerator = self.improper_numerator() * other.improper_numerator();
        let denominator = &self.denominator * &other.denominator;
        let mut result = Self::topheavy_unchecked(numerator, denominator);
        result.simplify();
        trace!("{self} * {other} = {result}");
        result
    }

    /// Multiply by the reciprocal of `other`.
    ///
    /// Fails with [`FractionError::DivisionByZero`] when `other` is zero-valued.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        let divisor = other.improper_numerator();
        if divisor.is_zero() {
            debug!("{self} / {other}: divisor is zero");
            return Err(FractionError::DivisionByZero);
        }

        let mut numerator = self.improper_numerator() * &other.denominator;
        let mut denominator = &self.denominator * divisor;
        // A negative divisor moves its sign to the numerator
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        let mut result = Self::topheavy_unchecked(numerator, denominator);
        result.simplify();
        trace!("{self} / {other} = {result}");
        Ok(result)
    }

    /// Canonical `1 / self`
    pub fn reciprocal(&self) -> Result<Self> {
        Self::one().divide(self)
    }

    /// Canonical `-self`
    pub fn negate(&self) -> Self {
        let mut result = Self::topheavy_unchecked(-self.improper_numerator(), self.denominator.clone());
        result.simplify();
        result
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cmp_value(other) {
            // Same value, different representation: unordered, since `==` is structural
            Ordering::Equal if self != other => None,
            ord => Some(ord),
        }
    }
}

impl From<Rational> for Fraction {
    /// Canonical mixed form of `value`, with a floored integer part
    fn from(value: Rational) -> Self {
        let (integer, numerator, denominator) = value.to_mixed_parts();
        Self {
            integer,
            numerator,
            denominator,
        }
    }
}

/// Writes the stored parts verbatim: `"I N/D"`, `"N/D"` when the integer part is zero,
/// `"I"` when the numerator is zero.
///
/// Under the floored sign convention a negative integer part is *added to* the
/// fraction part: `-2 1/2` is minus one and a half, not minus two and a half.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator.is_zero() {
            write!(f, "{}", self.integer)
        } else if self.integer.is_zero() {
            write!(f, "{}/{}", self.numerator, self.denominator)
        } else {
            write!(f, "{} {}/{}", self.integer, self.numerator, self.denominator)
        }
    }
}

// Binary operators on references only: owned impls would shadow the inherent `add`.

impl std::ops::Add for &Fraction {
    type Output = Fraction;

    fn add(self, other: Self) -> Fraction {
        Fraction::add(self, other)
    }
}

impl std::ops::Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, other: Self) -> Fraction {
        self.subtract(other)
    }
}

impl std::ops::Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, other: Self) -> Fraction {
        self.multiply(other)
    }
}

impl std::ops::Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negate()
    }
}

impl std::ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negate()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use num_rational::BigRational;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn reference(f: &Fraction) -> BigRational {
        BigRational::new(f.improper_numerator(), f.denominator().clone())
    }

    fn fraction_strategy() -> impl Strategy<Value = Fraction> {
        (-1_000i64..1_000, 0i64..1_000, 1i64..1_000)
            .prop_map(|(i, n, d)| Fraction::new(i, n, d).unwrap())
    }

    proptest! {
        #[test]
        fn add_matches_big_rational(a in fraction_strategy(), b in fraction_strategy()) {
            let sum = a.add(&b);
            prop_assert!(sum.is_canonical());
            prop_assert_eq!(reference(&sum), reference(&a) + reference(&b));
            prop_assert_eq!(Fraction::from(sum.to_rational()), sum);
        }

        #[test]
        fn subtract_matches_big_rational(a in fraction_strategy(), b in fraction_strategy()) {
            let diff = a.subtract(&b);
            prop_assert!(diff.is_canonical());
            prop_assert_eq!(reference(&diff), reference(&a) - reference(&b));
        }

        #[test]
        fn multiply_matches_big_rational(a in fraction_strategy(), b in fraction_strategy()) {
            let prod = a.multiply(&b);
            prop_assert!(prod.is_canonical());
            prop_assert_eq!(reference(&prod), reference(&a) * reference(&b));
        }

        #[test]
        fn divide_matches_big_rational(a in fraction_strategy(), b in fraction_strategy()) {
            match a.divide(&b) {
                Ok(quot) => {
                    prop_assert!(quot.is_canonical());
                    prop_assert_eq!(reference(&quot), reference(&a) / reference(&b));
                }
                Err(e) => {
                    prop_assert_eq!(e, FractionError::DivisionByZero);
                    prop_assert!(b.is_zero());
                }
            }
        }

        #[test]
        fn simplify_is_idempotent(a in fraction_strategy()) {
            let once = a.simplified();
            prop_assert!(once.is_canonical());
            prop_assert!(once.same_value(&a));
            prop_assert_eq!(once.simplified(), once);
        }

        #[test]
        fn ordering_matches_big_rational(a in fraction_strategy(), b in fraction_strategy()) {
            let expected = reference(&a).cmp(&reference(&b));
            prop_assert_eq!(a.cmp_value(&b), expected);
            prop_assert_eq!(a > b, expected == Ordering::Greater);
            prop_assert_eq!(a < b, expected == Ordering::Less);
        }

        #[test]
        fn display_parse_roundtrip(a in fraction_strategy()) {
            let canonical = a.simplified();
            prop_assert_eq!(canonical.to_string().parse::<Fraction>().unwrap(), canonical);
        }
    }

    #[test]
    fn test_same_value_is_equivalence() {
        let mut rng = StdRng::seed_from_u64(42);

        // Small ranges so equal values turn up often
        let fractions: Vec<Fraction> = (0..60)
            .map(|_| {
                let d = rng.gen_range(1..6i64);
                Fraction::new(rng.gen_range(0..3i64), rng.gen_range(0..12i64), d).unwrap()
            })
            .collect();

        for a in &fractions {
            assert!(a.same_value(a));
            for b in &fractions {
                assert_eq!(a.same_value(b), b.same_value(a));
                for c in &fractions {
                    if a.same_value(b) && b.same_value(c) {
                        assert!(a.same_value(c), "{a} ~ {b} ~ {c}");
                    }
                }
            }
        }
    }
}
