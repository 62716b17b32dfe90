mod cli;
mod commands;
mod output;

use std::path::PathBuf;

use clap::Parser;
use cli::{Cli, ColorMode, Commands};
use hookpack_core::settings::default_settings_path;
use output::{OutputMode, Reporter};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Human
    };

    match cli.color {
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Auto => {}
    }

    let mut reporter = Reporter::new(mode);
    let settings = cli.settings.as_deref();

    let success = match cli.command {
        Commands::Install {
            pack_id,
            hooks_json,
        } => match resolve_settings_path(settings, &mut reporter) {
            Some(path) => {
                commands::install::run_install(&pack_id, &hooks_json, &path, &mut reporter)
            }
            None => false,
        },
        Commands::Uninstall { pack_id } => match resolve_settings_path(settings, &mut reporter) {
            Some(path) => commands::uninstall::run_uninstall(&pack_id, &path, &mut reporter),
            None => false,
        },
        Commands::Repair => match resolve_settings_path(settings, &mut reporter) {
            Some(path) => commands::repair::run_repair(&path, &mut reporter),
            None => false,
        },
        Commands::Completions { shell } => commands::completions::run_completions(shell),
    };

    reporter.finish();

    if !success {
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
/// `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Uses `--settings` if given, otherwise `~/.claude/settings.json`.
fn resolve_settings_path(
    settings_override: Option<&str>,
    reporter: &mut Reporter,
) -> Option<PathBuf> {
    let path = match settings_override {
        Some(path) => PathBuf::from(path),
        None => match default_settings_path() {
            Ok(p) => p,
            Err(e) => {
                reporter.error(&format!("{e}"));
                return None;
            }
        },
    };
    debug!(path = %path.display(), "using settings file");
    Some(path)
}
