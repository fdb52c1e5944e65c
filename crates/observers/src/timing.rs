use std::{
    any::type_name,
    fmt,
    time::{Duration, Instant},
};

use duet_core::{Model, Observer};

/// The elapsed wall-clock time of one timed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Name of the timed callable.
    pub name: &'static str,

    /// Monotonic time between entering and leaving the callable.
    pub elapsed: Duration,
}

/// Renders the console report line, with seconds to ten decimal places.
impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Finished '{}' in {:.10} secs",
            self.name,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Calls `f`, reports how long it took, and returns its value unchanged.
///
/// The observer receives exactly one [`Timing`] per call, after `f` returns.
/// If `f` panics, the panic unwinds through and nothing is reported.
///
/// # Example
///
/// ```
/// use duet_observers::{RecordTimings, timed};
///
/// let mut timings = RecordTimings::default();
/// let answer = timed("answer", &mut timings, || 42);
///
/// assert_eq!(answer, 42);
/// assert_eq!(timings.len(), 1);
/// assert_eq!(timings.timings()[0].name, "answer");
/// ```
pub fn timed<T, F, Obs>(name: &'static str, mut observer: Obs, f: F) -> T
where
    F: FnOnce() -> T,
    Obs: Observer<Timing>,
{
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();

    observer.observe(&Timing { name, elapsed });
    value
}

/// Times a single model call, naming the report after the model's type.
///
/// A call that returns `Err` is not reported; the error ends the call chain
/// and is returned unchanged.
///
/// # Errors
///
/// Returns the model's error unchanged.
pub fn time_model<M, Obs>(
    model: &M,
    input: M::Input,
    mut observer: Obs,
) -> Result<M::Output, M::Error>
where
    M: Model,
    Obs: Observer<Timing>,
{
    let start = Instant::now();
    let output = model.call(input)?;
    let elapsed = start.elapsed();

    observer.observe(&Timing {
        name: short_type_name::<M>(),
        elapsed,
    });
    Ok(output)
}

/// Returns the unqualified name of `T`, without generic parameters.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    use duet_algorithms::{IterativeFactorial, RecursivePrefixSum};
    use duet_core::Error;
    use num_bigint::BigUint;
    use serde_json::json;

    use crate::RecordTimings;

    fn answer() -> u32 {
        42
    }

    #[test]
    fn returns_value_and_reports_once() {
        let mut timings = RecordTimings::default();

        let value = timed("answer", &mut timings, answer);

        assert_eq!(value, 42);
        assert_eq!(timings.len(), 1);
        assert_eq!(timings.timings()[0].name, "answer");
    }

    #[test]
    fn report_line_format() {
        let timing = Timing {
            name: "runA",
            elapsed: Duration::from_micros(1500),
        };
        assert_eq!(timing.to_string(), "Finished 'runA' in 0.0015000000 secs");
    }

    #[test]
    fn passes_arguments_through() {
        let mut seen = Vec::new();
        let joined = timed(
            "join",
            |t: &Timing| seen.push(t.name),
            || ["a", "b"].join("-"),
        );
        assert_eq!(joined, "a-b");
        assert_eq!(seen, vec!["join"]);
    }

    #[test]
    fn model_success_is_named_after_type() {
        let mut timings = RecordTimings::default();

        let output = time_model(&IterativeFactorial, 5, &mut timings);

        assert_eq!(output, Ok(BigUint::from(120u32)));
        assert_eq!(timings.timings()[0].name, "IterativeFactorial");
    }

    #[test]
    fn model_errors_pass_through_unreported() {
        let mut timings = RecordTimings::default();

        let output = time_model(&RecursivePrefixSum, json!("not a list"), &mut timings);

        assert_eq!(output, Err(Error::NotAList));
        assert!(timings.is_empty(), "failed calls are not reported");
    }

    #[test]
    fn short_names() {
        assert_eq!(short_type_name::<IterativeFactorial>(), "IterativeFactorial");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
        assert_eq!(short_type_name::<u8>(), "u8");
    }
}
