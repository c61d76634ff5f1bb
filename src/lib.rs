//! Simple and daily compounded interest for fixed deposits held over a date range.

pub mod deposit;
pub mod error;

pub use deposit::{
    compute_compound_interest, compute_extra_percentage, compute_simple_interest, FixedDeposit,
    InterestSummary,
};
pub use error::{InterestError, InterestResult};
