//! The two console exercises: time both variants, then print the results.

use std::io::Write;

use duet_algorithms::{
    IterativeFactorial, IterativePrefixSum, RecursiveFactorial, RecursivePrefixSum, prefix_sum,
};
use duet_observers::{Comparison, PrintTimings, TraceTimings, compare};
use serde_json::Value;
use tracing::warn;

/// Times both factorial variants on `n` and prints both results.
pub fn run_factorial<W: Write>(n: i64, out: &mut W) -> anyhow::Result<()> {
    let comparison = compare(
        &IterativeFactorial,
        &RecursiveFactorial,
        n,
        (PrintTimings::new(&mut *out), TraceTimings),
    )?;
    check_agreement("factorial", &comparison);

    writeln!(out, "{}", comparison.iterative)?;
    writeln!(out, "{}", comparison.recursive)?;
    Ok(())
}

/// Times both prefix sum variants on `value` and prints the input and both
/// results.
pub fn run_prefix_sum<W: Write>(value: Value, out: &mut W) -> anyhow::Result<()> {
    let comparison = compare(
        &IterativePrefixSum,
        &RecursivePrefixSum,
        value.clone(),
        (PrintTimings::new(&mut *out), TraceTimings),
    )?;
    check_agreement("prefix sum", &comparison);

    let original = prefix_sum::before(&value)?;
    writeln!(out, "Original: {original}")?;
    writeln!(out, "Non Recursive Way Result: {}", comparison.iterative)?;
    writeln!(out, "Recursive Way Result: {}", comparison.recursive)?;
    Ok(())
}

fn check_agreement<T: PartialEq>(exercise: &str, comparison: &Comparison<T>) {
    if !comparison.agree() {
        warn!(exercise, "iterative and recursive variants disagree");
    }
}
