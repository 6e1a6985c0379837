use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// One or more of S, K, T, sigma is not strictly positive.
    /// The message lists every offending field.
    #[error("invalid parameter: {0} must be positive")]
    NonPositiveParameter(String),
    /// One or more of r, D is negative.
    #[error("invalid parameter: {0} must be non-negative")]
    NegativeParameter(String),
}
