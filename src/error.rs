//! Failure kinds produced by the calculator.
//!
//! Every stage of the pipeline fails with exactly one of these variants and
//! the first failure ends the run. `Display` reproduces the historical
//! message text so callers comparing strings keep working, but the variant
//! (or [`CalcError::kind`]) is what callers should branch on.

use thiserror::Error;

/// Error returned by [`crate::add`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The `//` header is not a sequence of `[delimiter]` groups.
    #[error("Delimiters are not correctly defined.")]
    DelimiterDefinition,

    /// The `//` header is not terminated by a newline, so no payload exists.
    #[error("Numbers are not correctly defined.")]
    NumbersDefinition,

    /// A token is not a strict decimal `i32`.
    #[error("Wrong number format: {token}")]
    NumberFormat { token: String },

    /// One or more negative values survived filtering (kept in input order).
    #[error("negatives not allowed: {values:?}")]
    NegativeNumbers { values: Vec<i32> },

    /// The running sum would exceed `max`.
    #[error("The sum is greater than allowed. Max sum is: {max}")]
    Overflow { max: i32 },
}

/// Payload-free discriminant of [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DelimiterDefinition,
    NumbersDefinition,
    NumberFormat,
    NegativeNumbers,
    Overflow,
}

impl ErrorKind {
    /// Stable snake_case name, used in logs and the CLI report.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::DelimiterDefinition => "delimiter_definition",
            ErrorKind::NumbersDefinition => "numbers_definition",
            ErrorKind::NumberFormat => "number_format",
            ErrorKind::NegativeNumbers => "negative_numbers",
            ErrorKind::Overflow => "overflow",
        }
    }
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::DelimiterDefinition => ErrorKind::DelimiterDefinition,
            CalcError::NumbersDefinition => ErrorKind::NumbersDefinition,
            CalcError::NumberFormat { .. } => ErrorKind::NumberFormat,
            CalcError::NegativeNumbers { .. } => ErrorKind::NegativeNumbers,
            CalcError::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_reference_text() {
        let cases: Vec<(CalcError, &str)> = vec![
            (CalcError::DelimiterDefinition, "Delimiters are not correctly defined."),
            (CalcError::NumbersDefinition, "Numbers are not correctly defined."),
            (CalcError::NumberFormat { token: "4l".to_string() }, "Wrong number format: 4l"),
            (CalcError::NegativeNumbers { values: vec![-3, -4] }, "negatives not allowed: [-3, -4]"),
            (
                CalcError::Overflow { max: i32::MAX },
                "The sum is greater than allowed. Max sum is: 2147483647",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn kind_names_are_distinct() {
        let kinds = [
            ErrorKind::DelimiterDefinition,
            ErrorKind::NumbersDefinition,
            ErrorKind::NumberFormat,
            ErrorKind::NegativeNumbers,
            ErrorKind::Overflow,
        ];
        let names: std::collections::HashSet<_> = kinds.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), kinds.len());
        assert_eq!(CalcError::NegativeNumbers { values: vec![-1] }.kind(), ErrorKind::NegativeNumbers);
    }
}
