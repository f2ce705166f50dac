//! Binary entry point: parse the command line, seed the roster from the given
//! file, and hand control to the menu loop until the user quits.
use std::process::ExitCode;

use clap::Parser;
use player_manager::config::{Cli, Settings};
use player_manager::ui::surface_error;
use player_manager::{load_players, logging, run_app, App};

/// A missing or unreadable seed file ends the process with a non-zero status
/// and a one-line reason on stderr. The full chain goes to the debug log.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("fatal error: {err:#}");
            eprintln!("error: {}", surface_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    logging::init(&cli.log_level)?;

    let report = load_players(&cli.seed_file)?;
    for diagnostic in &report.diagnostics {
        eprintln!("{diagnostic}");
    }

    let settings = Settings::from(cli);
    let mut app = App::new(report.players.into());
    run_app(&mut app, &settings)
}
