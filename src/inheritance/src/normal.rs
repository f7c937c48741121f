use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

/// Cumulative distribution function of N(`mean`, `std_dev`) evaluated at `x`,
/// i.e. P(X <= x).
///
/// Computed through the complementary error function of `statrs`, which is accurate to
/// roughly 1e-11 in absolute terms. NaN inputs propagate to the output; `std_dev` is not checked.
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    0.5 * erfc(-(x - mean) / (std_dev * SQRT_2))
}

/// Survival function (upper tail) of N(`mean`, `std_dev`) at `x`, i.e. P(X > x).
///
/// Matches `1 - normal_cdf(..)`.
pub fn normal_sf(x: f64, mean: f64, std_dev: f64) -> f64 {
    1.0 - normal_cdf(x, mean, std_dev)
}
