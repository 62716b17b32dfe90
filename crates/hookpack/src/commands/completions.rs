//! Handler for the `hookpack completions` CLI command.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Writes the completion script for `shell` to stdout.
pub fn run_completions(shell: Shell) -> bool {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    true
}
