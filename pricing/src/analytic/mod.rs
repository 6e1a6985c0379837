mod black_scholes;
mod norm;

pub use black_scholes::{d1_d2, BlackScholesMerton, OptionPrice};
pub use norm::norm_cdf_approx;
