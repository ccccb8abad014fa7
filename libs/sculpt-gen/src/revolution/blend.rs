//! Gaussian blending between neighbouring profile curves.
//!
//! The raw Gaussian ratio `w2 / (w1 + w2)` with `w1 = exp(-(u/σ)²)` and
//! `w2 = exp(-((1-u)/σ)²)` is flat near both curves and steep around the
//! midpoint, but it only approaches 0 and 1. [`gaussian_factor`] rescales it
//! so `u = 0` and `u = 1` land exactly on the bracketing curves.

use ::config::constants::BLEND_SIGMA;

fn raw_factor(u: f64, sigma: f64) -> f64 {
    let w1 = (-(u / sigma).powi(2)).exp();
    let w2 = (-((1.0 - u) / sigma).powi(2)).exp();
    w2 / (w1 + w2)
}

/// Interpolation factor for fraction `u` (clamped to `[0, 1]`) with the
/// given Gaussian width.
///
/// Returns exactly 0 at `u = 0`, exactly 1 at `u = 1` and 0.5 at the midpoint.
pub fn gaussian_factor_with(u: f64, sigma: f64) -> f64 {
    let u = u.clamp(0.0, 1.0);
    if u == 0.0 {
        return 0.0;
    }
    if u == 1.0 {
        return 1.0;
    }
    let low = raw_factor(0.0, sigma);
    let high = raw_factor(1.0, sigma);
    ((raw_factor(u, sigma) - low) / (high - low)).clamp(0.0, 1.0)
}

/// [`gaussian_factor_with`] at the standard width.
#[inline]
pub fn gaussian_factor(u: f64) -> f64 {
    gaussian_factor_with(u, BLEND_SIGMA)
}

/// Blends `a` towards `b` by the Gaussian factor of `u`.
///
/// # Example
///
/// ```rust
/// use sculpt_gen::revolution::blend::blend;
///
/// assert_eq!(blend(2.0, 6.0, 0.0), 2.0);
/// assert_eq!(blend(2.0, 6.0, 1.0), 6.0);
/// assert!((blend(2.0, 6.0, 0.5) - 4.0).abs() < 1e-12);
/// ```
pub fn blend(a: f64, b: f64, u: f64) -> f64 {
    let f = gaussian_factor(u);
    a + (b - a) * f
}
