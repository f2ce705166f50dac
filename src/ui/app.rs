//! The menu loop. [`App`] owns the roster and is the only place it changes;
//! each raw menu choice is validated into a [`Command`] before anything runs.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

use crate::models::{Player, PlayerOrder};
use crate::roster::Roster;

use super::view::{InputClosed, View};

/// Validated main-menu selections.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Insert,
    ListAll,
    ListAbove,
    Sort,
    Quit,
}

/// A menu choice that matches none of the listed options.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown option `{0}`")]
pub struct UnknownOption(pub String);

impl FromStr for Command {
    type Err = UnknownOption;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "1" => Ok(Command::Insert),
            "2" => Ok(Command::ListAll),
            "3" => Ok(Command::ListAbove),
            "4" => Ok(Command::Sort),
            "0" => Ok(Command::Quit),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

/// Whether the loop should keep showing the menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Owns the roster and turns menu selections into roster operations.
pub struct App {
    roster: Roster,
    state: SessionState,
}

impl App {
    /// Start a running session over an already seeded roster.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            state: SessionState::Running,
        }
    }

    /// Read-only access for callers that want to inspect the list after a
    /// session.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run menu cycles until the user quits. End of input counts as quitting.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        view: &mut View<R, W, E>,
    ) -> Result<()> {
        while self.state == SessionState::Running {
            match self.step(view) {
                Ok(()) => {}
                Err(err) if err.is::<InputClosed>() => {
                    debug!("input closed, ending session");
                    view.goodbye()?;
                    self.state = SessionState::Terminated;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// One full cycle: menu, choice, action, pause.
    pub fn step<R: BufRead, W: Write, E: Write>(
        &mut self,
        view: &mut View<R, W, E>,
    ) -> Result<()> {
        view.show_menu()?;
        let choice = view.read_choice()?;
        if self.handle_choice(&choice, view)? {
            self.state = SessionState::Terminated;
        } else {
            view.wait_for_key()?;
        }
        Ok(())
    }

    /// Dispatch a raw menu choice. Returns `true` when the session should end.
    pub fn handle_choice<R: BufRead, W: Write, E: Write>(
        &mut self,
        choice: &str,
        view: &mut View<R, W, E>,
    ) -> Result<bool> {
        match choice.parse::<Command>() {
            Ok(command) => self.handle_command(command, view),
            Err(UnknownOption(raw)) => {
                debug!(choice = %raw, "unknown menu option");
                view.error("Unknown option!")?;
                Ok(false)
            }
        }
    }

    /// Run a validated command against the roster. Only `Quit` returns
    /// `true`; every other command leaves the session running.
    pub fn handle_command<R: BufRead, W: Write, E: Write>(
        &mut self,
        command: Command,
        view: &mut View<R, W, E>,
    ) -> Result<bool> {
        debug!(?command, "dispatching command");
        match command {
            Command::Insert => {
                let player = view.ask_new_player()?;
                self.insert_player(player);
            }
            Command::ListAll => view.list_players(self.roster.players())?,
            Command::ListAbove => {
                let threshold = view.ask_minimum_score()?;
                view.list_players(self.roster.above(threshold))?;
            }
            Command::Sort => self.sort_players(view)?,
            Command::Quit => {
                view.goodbye()?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Append without any de-duplication.
    fn insert_player(&mut self, player: Player) {
        debug!(name = %player.name, score = player.score, "inserting player");
        self.roster.insert(player);
    }

    /// Read one order selection. An unknown order is reported and the roster
    /// is left untouched; there is no second attempt.
    fn sort_players<R: BufRead, W: Write, E: Write>(
        &mut self,
        view: &mut View<R, W, E>,
    ) -> Result<()> {
        view.show_sort_menu()?;
        let raw = view.read_choice()?;
        match raw.parse::<PlayerOrder>() {
            Ok(order) => self.roster.sort(order),
            Err(err) => {
                debug!(%err, "rejected sort order");
                view.error("Unknown player order!")?;
            }
        }
        Ok(())
    }
}
