use crate::analytic::norm::norm_cdf_approx;
use crate::common::models::{OptionParameters, PricingResult};

/// Intermediate values of the Black-Scholes formula,
/// '''math
/// d1 = (ln(S / K) + (r - D + sigma^2 / 2) T) / (sigma sqrt(T)),  d2 = d1 - sigma sqrt(T)
/// '''
pub fn d1_d2(dp: &OptionParameters) -> (f64, f64) {
    let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
    let d1 = ((dp.asset_price / dp.strike).ln()
        + (dp.rfr - dp.dividend_yield + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
        / sigma_exp;
    let d2 = d1 - sigma_exp;
    (d1, d2)
}

pub trait OptionPrice {
    type Params;
    fn call(params: &Self::Params) -> f64;
    fn call_delta(params: &Self::Params) -> f64;
}

/// European call price and delta for dividend-paying stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn call(dp: &OptionParameters) -> f64 {
        let (d1, d2) = d1_d2(dp);
        norm_cdf_approx(d1) * dp.asset_price * (-dp.dividend_yield * dp.time_to_expiration).exp()
            - norm_cdf_approx(d2) * dp.strike * (-dp.rfr * dp.time_to_expiration).exp()
    }

    fn call_delta(dp: &OptionParameters) -> f64 {
        let (d1, _) = d1_d2(dp);
        norm_cdf_approx(d1) * (-dp.dividend_yield * dp.time_to_expiration).exp()
    }
}

impl BlackScholesMerton {
    /// Price and delta from a single d1/d2 pass.
    pub fn evaluate(dp: &OptionParameters) -> PricingResult {
        let (d1, d2) = d1_d2(dp);
        let yield_discount = (-dp.dividend_yield * dp.time_to_expiration).exp();
        let phi_d1 = norm_cdf_approx(d1);
        let call_price = phi_d1 * dp.asset_price * yield_discount
            - norm_cdf_approx(d2) * dp.strike * (-dp.rfr * dp.time_to_expiration).exp();
        let call_delta = phi_d1 * yield_discount;
        PricingResult {
            d1,
            d2,
            call_price,
            call_delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const TOLERANCE: f64 = 1e-4;

    fn reference_params() -> OptionParameters {
        OptionParameters::new(35.0, 33.0, 180.0 / 365.0, 0.05, 0.25, 0.02).unwrap()
    }

    #[test]
    fn d1_d2_reference() {
        let (d1, d2) = d1_d2(&reference_params());
        assert_approx_eq!(d1, 0.507206, 1e-6);
        assert_approx_eq!(d2, 0.331644, 1e-6);
    }

    #[test]
    fn european_call() {
        let dp = reference_params();
        assert_approx_eq!(BlackScholesMerton::call(&dp), 3.770330, TOLERANCE);
    }

    #[test]
    fn european_call_delta() {
        let dp = reference_params();
        assert_approx_eq!(BlackScholesMerton::call_delta(&dp), 0.687184, TOLERANCE);
    }

    #[test]
    fn evaluate_agrees_with_single_shot_functions() {
        let dp = reference_params();
        let result = BlackScholesMerton::evaluate(&dp);
        assert_eq!(result.call_price, BlackScholesMerton::call(&dp));
        assert_eq!(result.call_delta, BlackScholesMerton::call_delta(&dp));
        let (d1, d2) = d1_d2(&dp);
        assert_eq!((result.d1, result.d2), (d1, d2));
    }

    #[test]
    fn in_the_money_near_expiry_approaches_discounted_intrinsic() {
        let dp = OptionParameters::new(35.0, 33.0, 0.02, 0.05, 0.25, 0.02).unwrap();
        let intrinsic = dp.asset_price * (-dp.dividend_yield * dp.time_to_expiration).exp()
            - dp.strike * (-dp.rfr * dp.time_to_expiration).exp();
        let price = BlackScholesMerton::call(&dp);
        assert!(price >= intrinsic);
        assert_approx_eq!(price, intrinsic, 0.05);
    }

    #[test]
    fn out_of_the_money_near_expiry_approaches_zero() {
        let dp = OptionParameters::new(30.0, 33.0, 0.05, 0.05, 0.25, 0.02).unwrap();
        let price = BlackScholesMerton::call(&dp);
        assert!(price > 0.0 && price < 0.1);
        assert_approx_eq!(price, 0.066975, TOLERANCE);
    }

    #[test]
    fn delta_bounded_by_yield_discount() {
        for (s, k, t, sigma) in [
            (35.0, 33.0, 180.0 / 365.0, 0.25),
            (33.0, 33.0, 0.5, 0.2),
            (30.0, 33.0, 1.0, 0.3),
            (36.0, 33.0, 0.25, 0.2),
        ] {
            let dp = OptionParameters::new(s, k, t, 0.05, sigma, 0.02).unwrap();
            let delta = BlackScholesMerton::call_delta(&dp);
            let upper = (-dp.dividend_yield * dp.time_to_expiration).exp();
            assert!(delta > 0.0 && delta < upper);
        }
    }
}
