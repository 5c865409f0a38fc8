//! Command-line configuration and the load/multiply/save driver.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::info;

use crate::error::{Error, Result};
use crate::matrix::io::{load_matrix, save_matrix};
use crate::threaded::row_band_mt::{matmul_row_band_mt, MAX_THREADS};

/// Multiply two N×N integer matrices with a fixed number of threads.
///
/// Set RUST_LOG=debug for per-worker logs on stderr.
#[derive(Parser, Debug)]
#[command(name = "rowmul", version, about)]
pub struct Args {
    /// Worker threads, 1 to 8
    #[arg(value_name = "numThreads", allow_hyphen_values = true)]
    pub num_threads: String,

    /// Matrix dimension
    #[arg(value_name = "N", allow_hyphen_values = true)]
    pub n: String,

    /// Input matrix A, whitespace-separated integers
    #[arg(value_name = "fileA")]
    pub file_a: PathBuf,

    /// Input matrix B, whitespace-separated integers
    #[arg(value_name = "fileB")]
    pub file_b: PathBuf,

    /// Output matrix C, one integer per line
    #[arg(value_name = "fileC")]
    pub file_c: PathBuf,
}

/// Validated run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub threads: usize,
    pub n: usize,
    pub file_a: PathBuf,
    pub file_b: PathBuf,
    pub file_c: PathBuf,
}

impl TryFrom<Args> for Config {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        let threads = parse_int("numThreads", &args.num_threads)?;
        let n = parse_int("N", &args.n)?;

        if !(1..=MAX_THREADS as i64).contains(&threads) {
            return Err(Error::ThreadCount(threads));
        }
        if n < 1 {
            return Err(Error::Dimension(n));
        }

        Ok(Config {
            threads: threads as usize,
            n: addressable_dimension(n).ok_or(Error::Dimension(n))?,
            file_a: args.file_a,
            file_b: args.file_b,
            file_c: args.file_c,
        })
    }
}

/// `n` as a usize, if an N×N `i32` buffer fits in the address space.
fn addressable_dimension(n: i64) -> Option<usize> {
    let n = usize::try_from(n).ok()?;
    n.checked_mul(n)
        .and_then(|cells| cells.checked_mul(size_of::<i32>()))
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .map(|_| n)
}

fn parse_int(name: &'static str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| Error::Parse {
        name,
        value: value.to_string(),
    })
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Multiply with these settings.
    Run(Config),
    /// `--help` or `--version`: print this text and exit successfully.
    Info(String),
}

/// Parses `argv` (program name first).
///
/// Any clap failure other than `--help`/`--version`, such as a wrong
/// argument count, becomes [`Error::Usage`] carrying the usage line.
pub fn parse_config<I, T>(argv: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Config::try_from(args).map(Invocation::Run),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(Invocation::Info(err.render().to_string()))
            }
            _ => Err(Error::Usage(Args::command().render_usage().to_string())),
        },
    }
}

/// Loads A and B, multiplies them, reports the time and saves C.
///
/// Only the multiply itself is timed. The `Execution Time` line is written
/// to `report` before C is saved.
pub fn run<W: Write>(config: &Config, report: &mut W) -> Result<Duration> {
    let a = load_matrix(&config.file_a, config.n)?;
    let b = load_matrix(&config.file_b, config.n)?;

    info!(n = config.n, threads = config.threads, "multiplying");
    let start = Instant::now();
    let c = matmul_row_band_mt(&a, &b, config.threads)?;
    let elapsed = start.elapsed();

    writeln!(report, "Execution Time: {:.6} seconds", elapsed.as_secs_f64())
        .map_err(Error::Report)?;

    save_matrix(&config.file_c, &c)?;
    Ok(elapsed)
}
