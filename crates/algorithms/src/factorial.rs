//! Factorial, computed by a descending loop or by direct recursion.
//!
//! Results are arbitrary precision, so every valid input yields the exact
//! mathematical factorial.
//!
//! # Limitations
//!
//! The recursive variant nests one call per factor. Keeping `n` within the
//! thread's stack limit is the caller's responsibility.

use duet_core::{Error, Model, Positive};
use num_bigint::BigUint;
use tracing::debug;

/// Checks that `n` is strictly positive.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n <= 0`.
pub fn before(n: i64) -> Result<Positive, Error> {
    Positive::new(n).inspect_err(|error| debug!(n, %error, "rejected factorial input"))
}

/// Computes `n!` with an accumulator, multiplying from `n - 1` down to 1.
#[must_use]
pub fn iterative(n: Positive) -> BigUint {
    let n = n.into_inner();
    if n == 1 {
        return BigUint::from(1u8);
    }

    let mut result = BigUint::from(n);
    for i in (1..n).rev() {
        result *= i;
    }
    result
}

/// Computes `n!` as `n * (n - 1)!`, bottoming out at one.
#[must_use]
pub fn recursive(n: Positive) -> BigUint {
    match n.pred() {
        None => BigUint::from(n.into_inner()),
        Some(next) => BigUint::from(n.into_inner()) * recursive(next),
    }
}

/// Checks `n` and computes its factorial iteratively.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n <= 0`.
pub fn factorial_iterative(n: i64) -> Result<BigUint, Error> {
    before(n).map(iterative)
}

/// Checks `n` and computes its factorial recursively.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n <= 0`.
pub fn factorial_recursive(n: i64) -> Result<BigUint, Error> {
    before(n).map(recursive)
}

/// The iterative factorial variant as a [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeFactorial;

impl Model for IterativeFactorial {
    type Input = i64;
    type Output = BigUint;
    type Error = Error;

    fn call(&self, n: i64) -> Result<BigUint, Error> {
        factorial_iterative(n)
    }
}

/// The recursive factorial variant as a [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveFactorial;

impl Model for RecursiveFactorial {
    type Input = i64;
    type Output = BigUint;
    type Error = Error;

    fn call(&self, n: i64) -> Result<BigUint, Error> {
        factorial_recursive(n)
    }
}
