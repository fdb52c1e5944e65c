//! Core traits and types for duet.
//!
//! This crate defines the shared abstractions the algorithm pairs and the
//! timing harness build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Observer`] — receives events emitted while a model runs
//! - [`Positive`], [`Number`], [`Numbers`] — inputs validated at construction
//! - [`validate`] — predicates for untyped input arriving as external text
//! - [`Error`] — the error kinds raised by precondition checks

mod error;
mod input;
mod model;
mod observer;
pub mod validate;

pub use error::Error;
pub use input::{Number, Numbers, Positive};
pub use model::Model;
pub use observer::Observer;
