use crate::error::PricingError;

/// Parameters of a European option on a dividend-paying stock,
/// valid by construction. A new market snapshot is a new instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
    /// the annualized continuous dividend yield
    pub dividend_yield: f64,
}

impl OptionParameters {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
        dividend_yield: f64,
    ) -> Result<Self, PricingError> {
        let non_positive: Vec<&str> = [
            ("S", asset_price),
            ("K", strike),
            ("T", time_to_expiration),
            ("sigma", vola),
        ]
        .iter()
        .filter(|(_, value)| *value <= 0.0)
        .map(|(name, _)| *name)
        .collect();
        if !non_positive.is_empty() {
            return Err(PricingError::NonPositiveParameter(non_positive.join(", ")));
        }

        let negative: Vec<&str> = [("r", rfr), ("D", dividend_yield)]
            .iter()
            .filter(|(_, value)| *value < 0.0)
            .map(|(name, _)| *name)
            .collect();
        if !negative.is_empty() {
            return Err(PricingError::NegativeParameter(negative.join(", ")));
        }

        Ok(Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
            dividend_yield,
        })
    }

    /// Parameters for a stock that pays no dividend.
    pub fn without_dividend(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Result<Self, PricingError> {
        Self::new(asset_price, strike, time_to_expiration, rfr, vola, 0.0)
    }
}

/// Outputs of one pricing pass. Recomputed on demand, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    pub d1: f64,
    pub d2: f64,
    pub call_price: f64,
    pub call_delta: f64,
}
