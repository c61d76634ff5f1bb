//! Error types for deposit interest calculations.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for interest calculations.
pub type InterestResult<T> = Result<T, InterestError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterestError {
    /// Principal or daily rate is not a finite number.
    #[error("Invalid {field}: {value}")]
    InvalidAmount { field: &'static str, value: String },

    /// Date string is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// End date precedes start date.
    #[error("End date {end} is before start date {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    /// Extra percentage is undefined when simple interest is zero.
    #[error("Simple interest is zero, extra percentage is undefined")]
    ZeroSimpleInterest,

    /// Floored result is not finite or does not fit in an i64.
    #[error("Result out of range: {value}")]
    OutOfRange { value: f64 },
}

impl InterestError {
    pub(crate) fn invalid_amount(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidAmount {
            field,
            value: value.to_string(),
        }
    }

    /// True for rejected inputs (amounts, dates, date range), false for arithmetic failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. } | Self::InvalidDate { .. } | Self::InvertedRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::InterestError;
    use chrono::NaiveDate;
    use test_log::test;

    #[test]
    fn test_is_invalid_input() {
        let start = NaiveDate::from_ymd_opt(2015, 3, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2015, 3, 25).unwrap();

        assert!(InterestError::invalid_amount("principal", f64::NAN).is_invalid_input());
        assert!(InterestError::InvertedRange { start, end }.is_invalid_input());
        assert!(!InterestError::ZeroSimpleInterest.is_invalid_input());
        assert!(!InterestError::OutOfRange { value: f64::INFINITY }.is_invalid_input());
    }

    #[test]
    fn test_error_messages() {
        let start = NaiveDate::from_ymd_opt(2015, 3, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2015, 3, 25).unwrap();

        assert_eq!(
            InterestError::InvertedRange { start, end }.to_string(),
            "End date 2015-03-25 is before start date 2015-03-30"
        );
        assert_eq!(
            InterestError::invalid_amount("daily rate", "abc").to_string(),
            "Invalid daily rate: abc"
        );
    }
}
