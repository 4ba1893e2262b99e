//! Mathematical utilities for angles and decay series.
//!
//! All angles are in radians, counter-clockwise positive.

use std::f64::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f64 = 2.0 * PI;

/// Normalize angle to [-π, π).
///
/// # Example
/// ```
/// use pada_plan::core::math::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert!((normalize_angle(PI / 2.0) - PI / 2.0).abs() < 1e-12);
/// assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TWO_PI;
    if a >= PI {
        a -= TWO_PI;
    } else if a < -PI {
        a += TWO_PI;
    }
    a
}

/// Signed shortest angular difference from `from` to `to`, in [-π, π).
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

/// Sum of the first `n` terms of a geometric series `a + a·r + … + a·r^(n-1)`.
///
/// A ratio of exactly 1 degenerates to `a·n`.
pub fn geometric_sum(a: f64, ratio: f64, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if ratio == 1.0 {
        return a * n as f64;
    }
    a * (1.0 - ratio.powi(n as i32)) / (1.0 - ratio)
}

/// Sum of an arithmetic series given its first term, last term and length.
pub fn arithmetic_sum(first: f64, last: f64, n: usize) -> f64 {
    (first + last) * n as f64 / 2.0
}

/// Sum of squares `1² + 2² + … + n²`.
pub fn square_sum(n: usize) -> f64 {
    let n = n as f64;
    n * (n + 1.0) * (2.0 * n + 1.0) / 6.0
}
