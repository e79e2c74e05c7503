//! # TestDrive CLI
//!
//! This is the binary entry point for the `testdrive` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the test drive they describe.
//! - Reporting a failed run once, on stdout, and exiting with status 1.
//!
//! The pipeline itself lives in the `testdrive` library crate; the binary is
//! a thin wrapper around it.

mod cli;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("\n💥  {}", err);
            ExitCode::FAILURE
        }
    }
}
