//! Operator types for range requirements

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Comparison operators for range requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Not equal (!=)
    NotEqual,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator: {0}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::NotEqual => "!=",
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", ">", ">=", "<", "<=", "!="]
    }
}

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Operator::Equal),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            "!=" => Ok(Operator::NotEqual),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
