//! Factorial and combination counts in float arithmetic.
//!
//! Values are exact for the pedagogical range (n up to a few dozen) and lose
//! precision beyond that; `factorial(n)` overflows to `inf` above 170.

use dx_core::{Error, Result};

/// Returned by [`factorial`] for negative input.
pub const NEGATIVE_FACTORIAL: f64 = -1.0;

/// `n!` as `f64`.
///
/// Returns [`NEGATIVE_FACTORIAL`] for `n < 0`. Use [`try_factorial`] when the
/// input is not known to be non-negative.
pub fn factorial(n: i64) -> f64 {
    if n < 0 {
        return NEGATIVE_FACTORIAL;
    }
    (2..=n).fold(1.0, |acc, i| acc * i as f64)
}

/// `n!` as `f64`, rejecting negative `n`.
pub fn try_factorial(n: i64) -> Result<f64> {
    if n < 0 {
        return Err(Error::Validation(format!("factorial requires n >= 0, got {}", n)));
    }
    Ok(factorial(n))
}

/// Number of ways to choose `r` items from `n`.
///
/// Zero when `r < 0` or `r > n`, so negative arguments never reach
/// [`factorial`].
pub fn combinations(n: i64, r: i64) -> f64 {
    if r < 0 || r > n {
        return 0.0;
    }
    factorial(n) / (factorial(r) * factorial(n - r))
}
