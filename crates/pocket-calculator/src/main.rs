//! Pocket calculator binary
//!
//! Run with: cargo run -p pocket-calculator -- --help

use std::process::ExitCode;

use clap::Parser;
use pocket_calculator::cli::{init_tracing, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match init_tracing(&cli).and_then(|()| run(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
