//! `name-conversion` — HDL declaration scan to `sed` directives.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::logging::Verbosity;

/// Converts HDL port and signal names to the prefixed naming convention by
/// generating `sed` substitution commands.
#[derive(Parser, Debug)]
#[command(
    name = "name-conversion",
    version,
    about = "Generate sed commands that migrate HDL names to the i_/o_/io_/n_ convention"
)]
pub struct RenameCli {
    /// Input VHDL file.
    pub file: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = RenameFormat::Sed)]
    pub format: RenameFormat,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Output format for rename candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenameFormat {
    /// One `s/OLD/new/g` line per candidate.
    Sed,
    /// A JSON array of candidates.
    Json,
}

/// Runs `name-conversion`, writing directives to `out`. Returns the exit code.
///
/// The whole file is scanned before anything is written, so a failure leaves
/// `out` untouched.
pub fn run(cli: &RenameCli, out: &mut dyn Write) -> Result<i32, Box<dyn std::error::Error>> {
    let candidates = gen4_rename::scan_file(&cli.file)?;

    match cli.format {
        RenameFormat::Sed => {
            for candidate in &candidates {
                writeln!(out, "{}", candidate.sed_directive())?;
            }
        }
        RenameFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&candidates)?)?;
        }
    }
    out.flush()?;
    Ok(0)
}
