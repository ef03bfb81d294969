//! guessjudge — interactive judge for the guess-the-number problem.
//!
//! The grading harness writes the test case to our stdin, then forwards the
//! contestant's stdout into the same pipe and our stdout to the contestant.
//! Diagnostics go to stderr; the exit code carries the verdict.

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use guessjudge_core::config::{self, JudgeConfig};
use guessjudge_core::{Interactor, JudgeExit};

#[derive(Parser)]
#[command(
    name = "guessjudge",
    version,
    about = "Interactive judge for the guess-the-number problem",
    long_about = "Reads the answer from the first line of stdin, then answers each \
                  guess with HIGH, LOW or OK. Exits 0 on a correct guess, 1 when the \
                  contestant fails, 3 when the test data is invalid.\n\n\
                  Set GUESSJUDGE_CONFIG to a TOML file to change the attempt budget, \
                  or GUESSJUDGE_TEST_DATA to read the answer from a file."
)]
struct Cli {}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = Cli::try_parse() {
        if let Err(print_err) = e.print() {
            tracing::debug!("failed to print usage: {print_err}");
        }
        return if e.use_stderr() {
            JudgeExit::JudgeError.into()
        } else {
            ExitCode::SUCCESS
        };
    }

    match config::load_config().and_then(judge) {
        Ok(exit) => exit.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            JudgeExit::JudgeError.into()
        }
    }
}

fn judge(config: JudgeConfig) -> Result<JudgeExit> {
    tracing::debug!(?config, "starting session");

    let mut input = io::stdin().lock();
    let mut interactor = Interactor::new(config, io::stdout().lock(), io::stderr());

    let exit = match interactor.config().test_data.clone() {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open test data: {}", path.display()))?;
            interactor.run(&mut BufReader::new(file), &mut input)
        }
        None => interactor.run_shared(&mut input),
    };

    Ok(exit)
}
