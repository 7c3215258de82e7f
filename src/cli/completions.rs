//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::args::Cli;

/// Print a completion script for the requested shell to stdout.
pub fn print(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "gavel", &mut std::io::stdout());
}
