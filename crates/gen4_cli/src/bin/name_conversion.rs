//! `name-conversion` — emit `sed` directives migrating HDL names to the
//! `i_`/`o_`/`io_`/`n_` prefix convention.

use clap::Parser;
use gen4_cli::rename::RenameCli;

fn main() {
    let cli = RenameCli::parse();
    gen4_cli::logging::init(&cli.verbosity);
    let mut stdout = std::io::stdout().lock();
    gen4_cli::exit_with(gen4_cli::rename::run(&cli, &mut stdout));
}
