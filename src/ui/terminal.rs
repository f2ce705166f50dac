//! Glue between the console view and the real process streams, plus the
//! crossterm-backed keypress pause.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::config::Settings;

use super::app::App;
use super::view::{Acknowledge, View};

/// Bind the view to the process's standard streams and drive the menu loop
/// until the user quits.
pub fn run_app(app: &mut App, settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    let acknowledge = if settings.no_pause {
        Acknowledge::Skip
    } else if interactive {
        Acknowledge::AnyKey
    } else {
        Acknowledge::Line
    };
    let color = !settings.no_color && io::stderr().is_terminal();

    let mut view = View::new(stdin.lock(), io::stdout().lock(), io::stderr())
        .with_acknowledge(acknowledge)
        .with_color(color);

    app.run(&mut view)
}

/// Block until a single key is pressed. Raw mode is held only for the
/// duration of the read.
pub fn wait_for_any_key() -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let result = read_key_press();
    disable_raw_mode().context("failed to disable raw mode")?;
    result
}

fn read_key_press() -> Result<()> {
    loop {
        if let Event::Key(key_event) = event::read().context("failed to read event")? {
            if key_event.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
