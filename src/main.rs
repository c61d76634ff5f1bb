use fixed_deposit::{FixedDeposit, InterestSummary};
use log::{info, warn};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    for (principal, rate, start, end) in [
        ("1000", "5", "2015-03-25", "2015-03-30"),
        ("25000", "0.02", "2024-01-01", "2025-01-01"),
        ("1000", "abc", "2015-03-25", "2015-03-30"),
    ] {
        let summary = FixedDeposit::parse(principal, rate, start, end).and_then(|deposit| {
            info!("{}", deposit);
            deposit.summary()
        });
        match summary {
            Ok(summary) => info!("{}", summary),
            Err(e) => warn!("{}", e),
        }
    }
}

// verifies that types can implement the gated traits below
#[allow(dead_code)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<FixedDeposit>();
    is_normal::<InterestSummary>();
}
