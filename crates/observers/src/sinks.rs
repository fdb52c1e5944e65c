use std::io::Write;

use duet_core::Observer;
use tracing::{info, warn};

use crate::Timing;

/// Writes one report line per timing to a writer.
///
/// Write failures are logged and otherwise ignored, since an observer cannot
/// change the outcome of the call it watches.
#[derive(Debug)]
pub struct PrintTimings<W> {
    writer: W,
}

impl<W: Write> PrintTimings<W> {
    /// Creates an observer that prints to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the observer and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Observer<Timing> for PrintTimings<W> {
    fn observe(&mut self, timing: &Timing) {
        if let Err(error) = writeln!(self.writer, "{timing}") {
            warn!(%error, name = timing.name, "failed to write timing report");
        }
    }
}

/// Collects every timing in the order reported.
#[derive(Debug, Clone, Default)]
pub struct RecordTimings {
    timings: Vec<Timing>,
}

impl RecordTimings {
    /// Returns the recorded timings.
    #[must_use]
    pub fn timings(&self) -> &[Timing] {
        &self.timings
    }

    /// Returns the number of recorded timings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timings.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}

impl Observer<Timing> for RecordTimings {
    fn observe(&mut self, timing: &Timing) {
        self.timings.push(*timing);
    }
}

/// Allows `&mut RecordTimings` to be passed to functions that take an
/// observer by value, so the recording can be inspected afterwards.
impl Observer<Timing> for &mut RecordTimings {
    fn observe(&mut self, timing: &Timing) {
        (*self).observe(timing);
    }
}

/// Emits each timing as an `info` event under the `duet::timing` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceTimings;

impl Observer<Timing> for TraceTimings {
    fn observe(&mut self, timing: &Timing) {
        info!(
            target: "duet::timing",
            name = timing.name,
            secs = timing.elapsed.as_secs_f64(),
            "finished"
        );
    }
}
