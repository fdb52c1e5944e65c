use duet_core::{Model, Observer};

use crate::{Timing, time_model};

/// The outputs of both variants of a pair, run on the same input.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<T> {
    pub iterative: T,
    pub recursive: T,
}

impl<T: PartialEq> Comparison<T> {
    /// Returns `true` if both variants produced equal outputs.
    #[must_use]
    pub fn agree(&self) -> bool {
        self.iterative == self.recursive
    }
}

/// Times the iterative variant, then the recursive variant, on one input.
///
/// The observer receives one [`Timing`] per variant that succeeds. The first
/// error stops the comparison and is returned unchanged.
///
/// # Errors
///
/// Returns the first error produced by either variant.
///
/// # Example
///
/// ```
/// use duet_algorithms::{IterativeFactorial, RecursiveFactorial};
/// use duet_observers::{RecordTimings, compare};
/// use num_bigint::BigUint;
///
/// let mut timings = RecordTimings::default();
/// let comparison = compare(&IterativeFactorial, &RecursiveFactorial, 5, &mut timings).unwrap();
///
/// assert!(comparison.agree());
/// assert_eq!(comparison.iterative, BigUint::from(120u32));
/// assert_eq!(timings.len(), 2);
/// ```
pub fn compare<I, R, Obs>(
    iterative: &I,
    recursive: &R,
    input: I::Input,
    mut observer: Obs,
) -> Result<Comparison<I::Output>, I::Error>
where
    I: Model,
    I::Input: Clone,
    R: Model<Input = I::Input, Output = I::Output, Error = I::Error>,
    Obs: Observer<Timing>,
{
    let iterative = time_model(iterative, input.clone(), |t: &Timing| observer.observe(t))?;
    let recursive = time_model(recursive, input, |t: &Timing| observer.observe(t))?;

    Ok(Comparison {
        iterative,
        recursive,
    })
}
