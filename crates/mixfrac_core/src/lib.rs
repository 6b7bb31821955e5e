//! Mixfrac Core Library
//!
//! Exact mixed-number arithmetic for building and checking fraction worksheets.
//!
//! # Overview
//!
//! A [`Fraction`] is `integer + numerator / denominator` with arbitrary-precision
//! parts. It can be held in any representation (mixed, top-heavy, unreduced) and
//! normalized on demand. Arithmetic never rounds and never overflows.
//!
//! ```
//! use mixfrac_core::Fraction;
//!
//! let a = Fraction::new(2, 5, 8)?;
//! let b = Fraction::new(4, 5, 6)?;
//! assert_eq!(a.add(&b), Fraction::new(7, 11, 24)?);
//! assert!(a.same_value(&Fraction::new(1, 26, 16)?));
//! # Ok::<(), mixfrac_core::FractionError>(())
//! ```
//!
//! # Key Components
//!
//! - [`fraction`] - Mixed-number type, normalization, ordering and arithmetic
//! - [`rational`] - Reduced rational used as the exact value of a fraction
//! - [`error`] - Error type shared by every fallible operation
//! - [`parse`] - `FromStr` for fractions

pub mod error;
pub mod fraction;
pub mod parse;
pub mod rational;

pub use error::{Component, FractionError, Result};
pub use fraction::Fraction;
pub use rational::Rational;
