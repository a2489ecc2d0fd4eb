//! `freqcalc` — PLL clock and counter-drift report.
//!
//! Parameters come from, in increasing precedence: the built-in board
//! defaults, the `[pll]` table of a `--config` file, and explicit flags.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gen4_common::Frequency;
use gen4_config::PllSection;
use gen4_pll::PllParams;

use crate::logging::Verbosity;

/// PLL clock frequency and millisecond-counter drift calculator.
#[derive(Parser, Debug)]
#[command(name = "freqcalc", version, about = "PLL clock and counter drift calculator")]
pub struct FreqCli {
    /// Input clock frequency (e.g. "33.333333MHz", "25000000").
    #[arg(long)]
    pub input: Option<Frequency>,

    /// Input (reference) divider.
    #[arg(long)]
    pub input_div: Option<u32>,

    /// Feedback divider.
    #[arg(long)]
    pub feedback_div: Option<u32>,

    /// Secondary output (CLKOK) divider.
    #[arg(long)]
    pub output_div: Option<u32>,

    /// Path to a `gen4.toml` file with a `[pll]` table.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for the report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl FreqCli {
    fn flag_overrides(&self) -> PllSection {
        PllSection {
            input: self.input,
            input_div: self.input_div,
            feedback_div: self.feedback_div,
            output_div: self.output_div,
        }
    }
}

/// Resolves the effective PLL parameters for an invocation.
pub fn resolve_params(cli: &FreqCli) -> Result<PllParams, Box<dyn std::error::Error>> {
    let file_section = match &cli.config {
        Some(path) => {
            log::info!("loading PLL parameters from {}", path.display());
            gen4_config::load_config(path)?.pll
        }
        None => PllSection::default(),
    };
    let merged = file_section.merged_with(&cli.flag_overrides());
    Ok(PllParams::from_section(&merged))
}

/// Runs `freqcalc`, writing the report to `out`. Returns the exit code.
pub fn run(cli: &FreqCli, out: &mut dyn Write) -> Result<i32, Box<dyn std::error::Error>> {
    let params = resolve_params(cli)?;
    let report = gen4_pll::compute(&params)?;

    match cli.format {
        ReportFormat::Text => {
            for line in report.render_text() {
                writeln!(out, "{line}")?;
            }
        }
        ReportFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    out.flush()?;
    Ok(0)
}
