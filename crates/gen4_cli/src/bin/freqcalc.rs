//! `freqcalc` — PLL clock and millisecond-counter drift report.

use clap::Parser;
use gen4_cli::freq::FreqCli;

fn main() {
    let cli = FreqCli::parse();
    gen4_cli::logging::init(&cli.verbosity);
    let mut stdout = std::io::stdout().lock();
    gen4_cli::exit_with(gen4_cli::freq::run(&cli, &mut stdout));
}
