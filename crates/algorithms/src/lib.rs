//! Iterative and recursive variants of two elementary algorithms.
//!
//! Each module pairs two independent formulations that compute the same
//! result and share one precondition check:
//!
//! - [`factorial`] — `n!` for a strictly positive `n`
//! - [`prefix_sum`] — running sums over a non-empty numeric sequence
//!
//! Every variant is available as a typed function taking input validated at
//! construction, as an untyped function that runs the precondition check
//! first, and as a [`Model`](duet_core::Model) for use with the timing harness.

pub mod factorial;
pub mod prefix_sum;

pub use factorial::{IterativeFactorial, RecursiveFactorial};
pub use prefix_sum::{IterativePrefixSum, RecursivePrefixSum};
