//! Timing harness and reusable observers for duet.
//!
//! The harness measures the wall-clock duration of a call and reports it to
//! an [`Observer`] as a [`Timing`] event. It never changes the call's return
//! value. An `Err` returned by a [`Model`] passes through untouched and is not
//! reported.
//!
//! # Entry points
//!
//! - [`timed`] — times any closure under a caller-chosen name
//! - [`time_model`] — times one [`Model`] call, named after the model type
//! - [`compare`] — times both variants of a pair on the same input
//!
//! # Observers
//!
//! - [`PrintTimings`] — writes `Finished '<name>' in <secs> secs` lines
//! - [`RecordTimings`] — keeps every event for later inspection
//! - [`TraceTimings`] — emits a `tracing` event per timing
//!
//! [`Observer`]: duet_core::Observer
//! [`Model`]: duet_core::Model

mod compare;
mod sinks;
mod timing;

pub use compare::{Comparison, compare};
pub use sinks::{PrintTimings, RecordTimings, TraceTimings};
pub use timing::{Timing, time_model, timed};
