//! Running prefix sums, computed by a left-to-right loop or by recursively
//! extending an accumulator.
//!
//! Element `i` of the output is the sum of input elements `0..=i`, so the
//! output always has the same length as the input. A single-element input is
//! returned as is, without allocating.
//!
//! # Untyped input
//!
//! [`prefix_sum_iterative`] and [`prefix_sum_recursive`] accept a
//! [`serde_json::Value`] and run [`before`] first. The checks run in order and
//! the first failure is reported:
//!
//! 1. absent or empty — [`Error::NoData`]
//! 2. not a sequence — [`Error::NotAList`]
//! 3. any non-numeric element — [`Error::NotNumberType`]

#[cfg(test)]
mod tests;

use duet_core::{Error, Model, Number, Numbers, validate};
use serde_json::Value;
use tracing::{debug, trace};

/// Checks that `value` is a non-empty sequence of numbers and converts it.
///
/// # Errors
///
/// Returns the first failing check's error; see the [module docs](self).
pub fn before(value: &Value) -> Result<Numbers, Error> {
    check(value)
        .and_then(|()| {
            let items = value.as_array().ok_or(Error::NotAList)?;
            let numbers = items
                .iter()
                .map(Number::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            Numbers::new(numbers)
        })
        .inspect_err(|error| debug!(%value, %error, "rejected prefix sum input"))
}

fn check(value: &Value) -> Result<(), Error> {
    if validate::is_none(value) || validate::is_empty(value) {
        return Err(Error::NoData);
    }
    if !validate::is_list(value) {
        return Err(Error::NotAList);
    }
    if !validate::has_only_number(value) {
        return Err(Error::NotNumberType);
    }
    Ok(())
}

/// Computes prefix sums with a single left-to-right pass.
///
/// Each new element is the input element itself while the output is still
/// empty, and the output's last element plus the input element afterwards.
#[must_use]
pub fn iterative(numbers: Numbers) -> Numbers {
    if numbers.len() == 1 {
        return numbers;
    }

    let mut result: Option<Numbers> = None;
    for &value in &numbers {
        if let Some(out) = result.as_mut() {
            let next = out.last() + value;
            out.push(next);
        } else {
            result = Some(Numbers::singleton(value));
        }
    }
    result.unwrap_or(numbers)
}

/// Computes prefix sums by seeding an accumulator with the first element and
/// recursively appending `acc[i - 1] + numbers[i]`.
///
/// Recursion depth equals the input length.
#[must_use]
pub fn recursive(numbers: Numbers) -> Numbers {
    if numbers.len() == 1 {
        return numbers;
    }

    let base = Numbers::singleton(numbers.first());
    extend(base, numbers.as_slice(), 1)
}

fn extend(mut base: Numbers, numbers: &[Number], index: usize) -> Numbers {
    if index == numbers.len() {
        return base;
    }

    trace!(index, "extending accumulator");
    let next = base[index - 1] + numbers[index];
    base.push(next);
    extend(base, numbers, index + 1)
}

/// Checks `value` and computes its prefix sums iteratively.
///
/// # Errors
///
/// Returns an error if `value` fails [`before`].
pub fn prefix_sum_iterative(value: &Value) -> Result<Numbers, Error> {
    before(value).map(iterative)
}

/// Checks `value` and computes its prefix sums recursively.
///
/// # Errors
///
/// Returns an error if `value` fails [`before`].
pub fn prefix_sum_recursive(value: &Value) -> Result<Numbers, Error> {
    before(value).map(recursive)
}

/// The iterative prefix sum variant as a [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativePrefixSum;

impl Model for IterativePrefixSum {
    type Input = Value;
    type Output = Numbers;
    type Error = Error;

    fn call(&self, value: Value) -> Result<Numbers, Error> {
        prefix_sum_iterative(&value)
    }
}

/// The recursive prefix sum variant as a [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursivePrefixSum;

impl Model for RecursivePrefixSum {
    type Input = Value;
    type Output = Numbers;
    type Error = Error;

    fn call(&self, value: Value) -> Result<Numbers, Error> {
        prefix_sum_recursive(&value)
    }
}
