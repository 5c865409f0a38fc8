//! rowmul: multiply two N×N integer matrices from files.
//!
//! Usage: rowmul <numThreads> <N> <fileA> <fileB> <fileC>

use std::io;
use std::process::ExitCode;

use rowmul::Invocation;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries the timing line and diagnostics, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let result = rowmul::parse_config(std::env::args_os()).and_then(|invocation| match invocation {
        Invocation::Run(config) => rowmul::run(&config, &mut io::stdout()).map(|_| ()),
        Invocation::Info(text) => {
            print!("{}", text);
            Ok(())
        }
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
