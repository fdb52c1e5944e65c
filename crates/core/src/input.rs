//! Inputs validated at construction.
//!
//! Typed callers build a [`Positive`] or a [`Numbers`] once and hand it to an
//! algorithm variant, which can then skip runtime inspection entirely.

mod number;
mod numbers;
mod positive;

pub use number::Number;
pub use numbers::Numbers;
pub use positive::Positive;
