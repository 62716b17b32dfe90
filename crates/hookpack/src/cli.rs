use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "hookpack",
    version,
    about = "Install and remove Claude Code hook packs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Color mode
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Path to settings.json (defaults to ~/.claude/settings.json)
    #[arg(long, global = true)]
    pub settings: Option<String>,

    /// Log what is being read and written to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge a pack's hooks into settings.json, replacing any earlier install
    Install {
        /// Pack identifier (the directory name under ~/.claude/hooks/sounds/)
        pack_id: String,

        /// Hook entries as JSON, e.g. '{"Stop": {"command": "...", "matcher": "..."}}'
        hooks_json: String,
    },

    /// Remove every hook belonging to a pack from settings.json
    Uninstall {
        /// Pack identifier
        pack_id: String,
    },

    /// Remove miscased SubAgentStart/SubAgentStop event keys
    Repair,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
