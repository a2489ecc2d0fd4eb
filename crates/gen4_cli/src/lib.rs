//! Command-line front ends for the gen4 HDL workflow utilities.
//!
//! Provides `freqcalc`, which prints the PLL clock and counter-drift report,
//! and `name-conversion`, which turns the declarations of an HDL file into
//! `sed` rename directives. Each binary is a thin `main` around the `run`
//! function of its module here, so the behaviour is testable in-process.

#![warn(missing_docs)]

pub mod freq;
pub mod logging;
pub mod rename;

use std::process;

/// Exits the process with the outcome of a command's `run` function.
///
/// `Ok(code)` exits with `code`; an error is printed to stderr as
/// `error: <message>` and exits with status 1.
pub fn exit_with(result: Result<i32, Box<dyn std::error::Error>>) -> ! {
    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
