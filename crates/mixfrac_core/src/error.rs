//! Error types for fraction construction and arithmetic

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    #[error("invalid fraction: denominator is zero")]
    ZeroDenominator,

    #[error("invalid fraction: division by a zero-valued fraction")]
    DivisionByZero,

    #[error("{component} must not be negative, got {value}")]
    NegativeComponent { component: Component, value: BigInt },

    #[error("negative value {integer} {numerator}/{denominator} has no top-heavy form")]
    NegativeTopHeavy {
        integer: BigInt,
        numerator: BigInt,
        denominator: BigInt,
    },

    #[error("failed to parse fraction `{input}`: {reason}")]
    Parse { input: String, reason: &'static str },
}

impl FractionError {
    /// True for the conditions that would otherwise produce an undefined value
    /// (a zero denominator or a zero divisor).
    pub fn is_invalid_fraction(&self) -> bool {
        matches!(self, FractionError::ZeroDenominator | FractionError::DivisionByZero)
    }
}

/// Which part of a fraction triple an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Numerator,
    Denominator,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Numerator => write!(f, "numerator"),
            Component::Denominator => write!(f, "denominator"),
        }
    }
}

pub type Result<T> = std::result::Result<T, FractionError>;
