use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde_json::Value;
use tracing::debug;

/// Length of the generated array when none is requested.
pub const DEFAULT_LEN: usize = 10;

/// Upper bound on the generated array length; the recursive variant nests
/// one call per element.
pub const MAX_LEN: u64 = 100;

const PROMPT: &str = "Input any number: ";
const MIN_VALUE: i64 = -10;
const MAX_VALUE: i64 = 10;

/// Prompts for and reads one integer.
///
/// Only parsing happens here; whether the integer is acceptable is decided
/// by the algorithm that receives it.
pub fn prompt_number<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> anyhow::Result<i64> {
    write!(writer, "{PROMPT}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        bail!("no input provided");
    }

    line.trim()
        .parse::<i64>()
        .with_context(|| format!("invalid integer: {:?}", line.trim()))
}

/// Parses a JSON document given on the command line.
///
/// Any JSON value is accepted; shape checks run later.
pub fn parse_values(text: &str) -> anyhow::Result<Value> {
    serde_json::from_str(text).with_context(|| format!("invalid JSON input: {text}"))
}

/// Generates `len` random integers in `[-10, 10]` as a JSON array.
pub fn random_values(len: usize, seed: Option<u64>) -> Value {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    debug!(len, ?seed, "generating random input");

    (0..len)
        .map(|_| Value::from(rng.random_range(MIN_VALUE..=MAX_VALUE)))
        .collect()
}
