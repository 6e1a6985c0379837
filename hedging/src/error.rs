use pricing::error::PricingError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HedgeError {
    /// A snapshot failed parameter validation; the run is aborted
    /// without a partial result.
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error("hedge schedule is empty")]
    EmptySchedule,
    #[error("hedge schedule days must be strictly increasing (day {prev} followed by day {next})")]
    UnorderedSchedule { prev: u32, next: u32 },
}
