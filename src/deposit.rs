use crate::error::{InterestError, InterestResult};
use chrono::NaiveDate;
use log::{trace, warn};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated terms of a fixed deposit held from `start_date` to `end_date`.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FixedDeposit {
    principal: f64,
    daily_rate: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl FixedDeposit {
    /// Builds a deposit from already-parsed dates.
    ///
    /// `daily_rate` is in percentage points per day. Fails when either amount is not
    /// finite or when `end_date` precedes `start_date`.
    pub fn new(
        principal: f64,
        daily_rate: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> InterestResult<Self> {
        let principal = check_amount("principal", principal)?;
        let daily_rate = check_amount("daily rate", daily_rate)?;

        if end_date < start_date {
            warn!(
                "rejecting deposit, end date {} is before start date {}",
                end_date, start_date
            );
            return Err(InterestError::InvertedRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            principal,
            daily_rate,
            start_date,
            end_date,
        })
    }

    /// Builds a deposit from numeric amounts and `YYYY-MM-DD` date strings.
    pub fn from_terms(
        principal: f64,
        daily_rate: f64,
        start_date: &str,
        end_date: &str,
    ) -> InterestResult<Self> {
        let principal = check_amount("principal", principal)?;
        let daily_rate = check_amount("daily rate", daily_rate)?;
        Self::new(principal, daily_rate, parse_date(start_date)?, parse_date(end_date)?)
    }

    /// Builds a deposit where every input arrives as text, e.g. from a form or a file.
    /// Amounts are trimmed and must parse as finite numbers.
    pub fn parse(
        principal: &str,
        daily_rate: &str,
        start_date: &str,
        end_date: &str,
    ) -> InterestResult<Self> {
        let principal = parse_amount("principal", principal)?;
        let daily_rate = parse_amount("daily rate", daily_rate)?;
        Self::from_terms(principal, daily_rate, start_date, end_date)
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn daily_rate(&self) -> f64 {
        self.daily_rate
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of days the deposit is held.
    pub fn days(&self) -> f64 {
        get_days(&self.start_date, &self.end_date)
    }

    /// Simple interest, floored: `P * R * N / 100`.
    pub fn simple_interest(&self) -> InterestResult<i64> {
        let days = self.days();
        let interest = (self.principal * self.daily_rate * days) / 100.;
        trace!("simple interest over {} days, raw {}", days, interest);
        floor_to_whole(interest)
    }

    /// Daily compounded interest, floored: `P * ((1 + R / 100)^N - 1)`.
    pub fn compound_interest(&self) -> InterestResult<i64> {
        let days = self.days();
        let interest = self.principal * ((1. + self.daily_rate / 100.).powf(days) - 1.);
        trace!("compound interest over {} days, raw {}", days, interest);
        floor_to_whole(interest)
    }

    /// Extra interest under compounding as a floored percentage of the simple interest.
    pub fn extra_percentage(&self) -> InterestResult<i64> {
        let simple = self.simple_interest()?;
        let compound = self.compound_interest()?;
        extra_percentage(simple, compound)
    }

    /// All three figures for this deposit. The extra percentage is `None` when the
    /// simple interest is zero.
    pub fn summary(&self) -> InterestResult<InterestSummary> {
        let simple_interest = self.simple_interest()?;
        let compound_interest = self.compound_interest()?;
        let extra_percentage = match extra_percentage(simple_interest, compound_interest) {
            Ok(pct) => Some(pct),
            Err(InterestError::ZeroSimpleInterest) => None,
            Err(e) => return Err(e),
        };

        Ok(InterestSummary {
            days: self.days(),
            simple_interest,
            compound_interest,
            extra_percentage,
        })
    }
}

impl fmt::Display for FixedDeposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "principal ${:.2}, daily rate {}%, from {} to {} ({} days)",
            self.principal,
            self.daily_rate,
            self.start_date,
            self.end_date,
            self.days()
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterestSummary {
    pub days: f64,
    pub simple_interest: i64,
    pub compound_interest: i64,
    pub extra_percentage: Option<i64>,
}

impl fmt::Display for InterestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, simple interest ${}, compound interest ${}, ",
            self.days, self.simple_interest, self.compound_interest
        )?;
        match self.extra_percentage {
            Some(pct) => write!(f, "extra {}%", pct),
            None => write!(f, "extra n/a"),
        }
    }
}

/// Simple interest for `principal` at `daily_rate` percent per day between two
/// `YYYY-MM-DD` dates, floored to a whole amount.
pub fn compute_simple_interest(
    principal: f64,
    daily_rate: f64,
    start_date: &str,
    end_date: &str,
) -> InterestResult<i64> {
    FixedDeposit::from_terms(principal, daily_rate, start_date, end_date)?.simple_interest()
}

/// Daily compounded interest between two `YYYY-MM-DD` dates, floored to a whole amount.
pub fn compute_compound_interest(
    principal: f64,
    daily_rate: f64,
    start_date: &str,
    end_date: &str,
) -> InterestResult<i64> {
    FixedDeposit::from_terms(principal, daily_rate, start_date, end_date)?.compound_interest()
}

/// How much more, in whole percent, compounding yields over simple interest.
///
/// Fails with [`InterestError::ZeroSimpleInterest`] for a zero rate, a zero-day range,
/// or any deposit too small to earn a whole unit of simple interest.
pub fn compute_extra_percentage(
    principal: f64,
    daily_rate: f64,
    start_date: &str,
    end_date: &str,
) -> InterestResult<i64> {
    let simple = compute_simple_interest(principal, daily_rate, start_date, end_date)?;
    let compound = compute_compound_interest(principal, daily_rate, start_date, end_date)?;
    extra_percentage(simple, compound)
}

fn extra_percentage(simple: i64, compound: i64) -> InterestResult<i64> {
    if simple == 0 {
        warn!("simple interest is zero, extra percentage is undefined");
        return Err(InterestError::ZeroSimpleInterest);
    }
    let extra = compound as f64 - simple as f64;
    floor_to_whole((extra / simple as f64) * 100.)
}

fn check_amount(field: &'static str, amount: f64) -> InterestResult<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        warn!("rejecting {} {}", field, amount);
        Err(InterestError::invalid_amount(field, amount))
    }
}

fn parse_amount(field: &'static str, text: &str) -> InterestResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(amount) => check_amount(field, amount),
        Err(_) => {
            warn!("rejecting {} '{}', not a number", field, text);
            Err(InterestError::invalid_amount(field, text))
        }
    }
}

fn parse_date(text: &str) -> InterestResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|e| {
        warn!("rejecting date '{}': {}", text, e);
        InterestError::InvalidDate {
            value: text.to_string(),
            reason: e.to_string(),
        }
    })
}

fn get_days(&start_date: &NaiveDate, &end_date: &NaiveDate) -> f64 {
    end_date.signed_duration_since(start_date).num_days() as f64
}

// floor and narrow to i64, rejecting NaN, infinities and anything i64 cannot hold
fn floor_to_whole(value: f64) -> InterestResult<i64> {
    let floored = value.floor();
    if floored.is_finite() && floored >= i64::MIN as f64 && floored < i64::MAX as f64 {
        Ok(floored as i64)
    } else {
        warn!("result {} is out of range", value);
        Err(InterestError::OutOfRange { value })
    }
}


#[cfg(test)]
mod proptests {
    use super::{compute_compound_interest, compute_simple_interest};
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;

    fn date_after(days: u64) -> String {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(days))
            .unwrap()
            .to_string()
    }

    proptest! {
        #[test]
        fn simple_interest_non_decreasing_in_days(
            principal in 0.0..1e7f64,
            rate in 0.0..50.0f64,
            short in 0u64..3650,
            extra in 0u64..3650,
        ) {
            let start = date_after(0);
            let shorter = compute_simple_interest(principal, rate, &start, &date_after(short)).unwrap();
            let longer = compute_simple_interest(principal, rate, &start, &date_after(short + extra)).unwrap();
            prop_assert!(shorter <= longer);
        }

        #[test]
        fn simple_interest_non_decreasing_in_rate(
            principal in 0.0..1e7f64,
            rate in -50.0..50.0f64,
            bump in 0.0..50.0f64,
            days in 0u64..3650,
        ) {
            let start = date_after(0);
            let end = date_after(days);
            let lower = compute_simple_interest(principal, rate, &start, &end).unwrap();
            let higher = compute_simple_interest(principal, rate + bump, &start, &end).unwrap();
            prop_assert!(lower <= higher);
        }

        #[test]
        fn compound_interest_zero_over_zero_days(
            principal in -1e9..1e9f64,
            rate in -1000.0..1000.0f64,
            days in 0u64..10000,
        ) {
            let date = date_after(days);
            prop_assert_eq!(compute_compound_interest(principal, rate, &date, &date), Ok(0));
        }
    }
}
