use std::f64::consts::PI;

/// Approximate the standard normal CDF with a truncated odd-power polynomial,
/// '''math
/// Phi(x) ~ 0.5 + (x - x^3/6 + x^5/40 - x^7/336 + x^9/3456) / sqrt(2 pi)
/// '''
/// intended for x in [0, 1]. Negative inputs use the symmetry
/// Phi(-x) = 1 - Phi(x), so the recursion is always exactly one level deep.
///
/// Inputs above 1 are still evaluated; a warning is emitted since the
/// truncation error grows quickly outside the intended interval. The
/// coefficients and term powers are contractual, not tunable.
pub fn norm_cdf_approx(x: f64) -> f64 {
    if x < 0.0 {
        return 1.0 - norm_cdf_approx(-x);
    }
    if x > 1.0 {
        tracing::warn!(
            x,
            "CDF input outside the polynomial's intended domain [0, 1]; result may be inaccurate"
        );
    }
    let c = 1.0 / (2.0 * PI).sqrt();
    let poly =
        x - x.powi(3) / 6.0 + x.powi(5) / 40.0 - x.powi(7) / 336.0 + x.powi(9) / 3456.0;
    0.5 + c * poly
}
