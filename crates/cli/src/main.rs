use std::io::{self, Write};

use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use tracing_subscriber::EnvFilter;

mod exercise;
mod input;

const DEFAULT_TRACE_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(
    name = "duet",
    author,
    version,
    about = "Time iterative and recursive variants of the same algorithm",
    long_about = None,
    after_help = "Diagnostics go to stderr; set RUST_LOG (e.g. RUST_LOG=debug) to see them."
)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute n! iteratively and recursively. Prompts for n when omitted.
    Factorial {
        /// A strictly positive integer
        #[arg(value_name = "N", allow_negative_numbers = true)]
        n: Option<i64>,
    },

    /// Compute running sums iteratively and recursively.
    ///
    /// Uses the JSON array given with --values, or a random integer array
    /// with elements in [-10, 10] otherwise.
    PrefixSum {
        /// Input as a JSON array, e.g. '[1, 2, 3]'
        #[arg(long, value_name = "JSON")]
        values: Option<String>,

        /// Length of the random array, at most 100 (ignored with --values)
        #[arg(
            long,
            default_value_t = input::DEFAULT_LEN,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=input::MAX_LEN)
        )]
        len: usize,

        /// Seed for a reproducible random array (ignored with --values)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let CliArgs { command } = CliArgs::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Factorial { n } => {
            let n = match n {
                Some(n) => n,
                None => input::prompt_number(io::stdin().lock(), &mut out)?,
            };
            exercise::run_factorial(n, &mut out)?;
        }
        Commands::PrefixSum { values, len, seed } => {
            let value = match values {
                Some(text) => input::parse_values(&text)?,
                None => input::random_values(len, seed),
            };
            exercise::run_prefix_sum(value, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
