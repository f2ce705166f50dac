//! Command-line configuration. Everything the program can be told lives on
//! the command line; there is no config file.

use std::path::PathBuf;

use clap::Parser;

/// Log filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Manage a list of players seeded from a `name,score` file.
#[derive(Parser, Debug)]
#[command(name = "player-manager", version)]
pub struct Cli {
    /// Seed file with one `name,score` record per line.
    pub seed_file: PathBuf,

    /// Do not wait for a keypress between actions.
    #[arg(long)]
    pub no_pause: bool,

    /// Never color error messages.
    #[arg(long)]
    pub no_color: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

/// Runtime switches consumed by the terminal layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub no_pause: bool,
    pub no_color: bool,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            no_pause: cli.no_pause,
            no_color: cli.no_color,
        }
    }
}
