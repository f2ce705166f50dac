//! Text rendering and prompting for the console session. Every byte the user
//! sees or types passes through [`View`]; the controller never touches the
//! streams directly, which is what lets tests script a whole session.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use thiserror::Error;

use crate::models::{Player, PlayerOrder};

use super::terminal::wait_for_any_key;

/// Raised when the input stream reaches end of file mid-session.
#[derive(Debug, Error)]
#[error("input stream closed")]
pub struct InputClosed;

/// How the view waits for the user between actions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Acknowledge {
    /// Single keypress read in raw mode.
    AnyKey,
    /// A whole line from the input stream. Used when stdin is not a terminal.
    Line,
    /// Do not pause at all. Scripted runs and `--no-pause` use this.
    Skip,
}

/// Console presentation layer. It reads and writes text and nothing else;
/// the player list only ever reaches it as a borrowed sequence.
pub struct View<R, W, E> {
    input: R,
    output: W,
    errors: E,
    acknowledge: Acknowledge,
    color: bool,
}

impl<R: BufRead, W: Write, E: Write> View<R, W, E> {
    /// Build a view over the given streams. It starts without pauses and
    /// without color; the terminal layer switches those on when it knows it
    /// is talking to a real console.
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
            acknowledge: Acknowledge::Skip,
            color: false,
        }
    }

    /// Choose how [`View::wait_for_key`] waits between actions.
    pub fn with_acknowledge(mut self, acknowledge: Acknowledge) -> Self {
        self.acknowledge = acknowledge;
        self
    }

    /// Paint error lines red. Only useful when the error stream is a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Hand the streams back, mostly so tests can inspect what was written.
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }

    /// Print the five main-menu options and leave the cursor on the choice
    /// prompt.
    pub fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Menu")?;
        writeln!(self.output, "----\n")?;
        writeln!(self.output, "1. Insert player")?;
        writeln!(self.output, "2. List all players")?;
        writeln!(self.output, "3. List players with score greater than")?;
        writeln!(self.output, "4. Sort players")?;
        writeln!(self.output, "0. Quit\n")?;
        self.prompt("Your choice > ")
    }

    /// Read a menu or submenu selection as trimmed raw text. Validation is
    /// left to the caller.
    pub fn read_choice(&mut self) -> Result<String> {
        Ok(self.read_line()?.trim().to_string())
    }

    /// Print a section header followed by one ` -> <player>` line per entry.
    /// Accepts any borrowed sequence so filtered views render the same way
    /// as the whole roster.
    pub fn list_players<'a, I>(&mut self, players: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Player>,
    {
        writeln!(self.output, "\nList of players")?;
        writeln!(self.output, "---------------\n")?;
        for player in players {
            writeln!(self.output, " -> {player}")?;
        }
        writeln!(self.output).context("failed to write player list")
    }

    /// Print the numbered sort orders and the `> ` prompt.
    pub fn show_sort_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nPlayer order")?;
        writeln!(self.output, "------------")?;
        for order in PlayerOrder::ALL {
            writeln!(self.output, "{}. {}", order as u8, order.label())?;
        }
        self.prompt("> ")
    }

    /// Prompt once and return the raw line without its terminator.
    pub fn ask_string(&mut self, prompt: &str) -> Result<String> {
        self.prompt(prompt)?;
        self.read_line()
    }

    /// Prompt for an integer, re-prompting until one parses.
    pub fn ask_int(&mut self, prompt: &str) -> Result<i64> {
        self.ask_parsed(prompt, "Please enter a valid integer.")
    }

    /// Keep asking until the answer parses as `T`. Only end of input stops
    /// the loop.
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str, retry: &str) -> Result<T> {
        loop {
            let raw = self.ask_string(prompt)?;
            match raw.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    writeln!(self.errors, "{retry}")?;
                }
            }
        }
    }

    /// Collect the name and score for a new player.
    pub fn ask_new_player(&mut self) -> Result<Player> {
        writeln!(self.output, "\nInsert player")?;
        writeln!(self.output, "-------------\n")?;
        let name = self.ask_name("Name: ")?;
        let score = self.ask_int("Score: ")?;
        Ok(Player::new(name, score))
    }

    /// Prompt for a player name, re-prompting while the trimmed answer is
    /// empty.
    pub fn ask_name(&mut self, prompt: &str) -> Result<String> {
        loop {
            let raw = self.ask_string(prompt)?;
            let name = raw.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            writeln!(self.errors, "Please enter a non-empty name.")?;
        }
    }

    /// Ask for the threshold used by the "score greater than" listing.
    pub fn ask_minimum_score(&mut self) -> Result<i64> {
        self.ask_int("\nMinimum score player should have? ")
    }

    /// Report a non-fatal problem on the error stream as `>>> message <<<`.
    pub fn error(&mut self, message: impl Display) -> Result<()> {
        let line = format!(">>> {message} <<<");
        if self.color {
            writeln!(self.errors, "\n{}\n", line.as_str().red())?;
        } else {
            writeln!(self.errors, "\n{line}\n")?;
        }
        self.errors.flush().context("failed to flush error stream")
    }

    /// Farewell line printed when the session ends.
    pub fn goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "Bye!")?;
        self.output.flush().context("failed to flush output")
    }

    /// Pause until the user acknowledges, according to the configured mode.
    pub fn wait_for_key(&mut self) -> Result<()> {
        if self.acknowledge == Acknowledge::Skip {
            return Ok(());
        }
        self.prompt("\nPress any key to continue...")?;
        match self.acknowledge {
            Acknowledge::AnyKey => wait_for_any_key()?,
            Acknowledge::Line => {
                self.read_line()?;
            }
            Acknowledge::Skip => {}
        }
        writeln!(self.output).context("failed to write output")
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush().context("failed to flush prompt")
    }

    /// Read one line without its terminator. Bytes that are not UTF-8 are
    /// replaced rather than rejected, so they reach the parsers as ordinary
    /// bad input and get re-prompted.
    fn read_line(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .context("failed to read input")?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    type TestView = View<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn view(input: &str) -> TestView {
        View::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    fn output(view: TestView) -> (String, String) {
        let (_, out, err) = view.into_parts();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn lists_players_one_per_line() {
        let mut view = view("");
        let players = [Player::new("Alice", 10), Player::new("Bob", -2)];
        view.list_players(&players).unwrap();

        let (out, _) = output(view);
        assert!(out.contains(" -> Alice with a score of 10\n"));
        assert!(out.contains(" -> Bob with a score of -2\n"));
    }

    #[test]
    fn empty_list_prints_only_the_header() {
        let mut view = view("");
        view.list_players(std::iter::empty()).unwrap();

        let (out, _) = output(view);
        assert_eq!(out, "\nList of players\n---------------\n\n\n");
    }

    #[test]
    fn ask_int_reprompts_until_valid() {
        let mut view = view("abc\n\n12x\n-42\n");
        assert_eq!(view.ask_int("Score: ").unwrap(), -42);

        let (out, err) = output(view);
        assert_eq!(out.matches("Score: ").count(), 4);
        assert_eq!(err.matches("Please enter a valid integer.").count(), 3);
    }

    #[test]
    fn invalid_utf8_input_is_reprompted() {
        let input = b"\xff\xfe\n12\n".to_vec();
        let mut view = View::new(Cursor::new(input), Vec::new(), Vec::new());
        assert_eq!(view.ask_int("Score: ").unwrap(), 12);

        let (out, err) = output(view);
        assert_eq!(out.matches("Score: ").count(), 2);
        assert_eq!(err.matches("Please enter a valid integer.").count(), 1);
    }

    #[test]
    fn blank_names_are_reprompted() {
        let mut view = view("\n   \n  Dana \n");
        assert_eq!(view.ask_name("Name: ").unwrap(), "Dana");

        let (out, err) = output(view);
        assert_eq!(out.matches("Name: ").count(), 3);
        assert_eq!(err.matches("Please enter a non-empty name.").count(), 2);
    }

    #[test]
    fn end_of_input_is_input_closed() {
        let mut view = view("nope\n");
        let err = view.ask_int("Score: ").unwrap_err();
        assert!(err.is::<InputClosed>());
    }

    #[test]
    fn sort_menu_lists_every_order() {
        let mut view = view("");
        view.show_sort_menu().unwrap();

        let (out, _) = output(view);
        assert!(out.contains("1. Order by score\n"));
        assert!(out.contains("2. Order by name\n"));
        assert!(out.contains("3. Order by name (reverse)\n"));
    }

    #[test]
    fn line_acknowledge_consumes_one_line() {
        let mut view = view("\n2\n").with_acknowledge(Acknowledge::Line);
        view.wait_for_key().unwrap();
        assert_eq!(view.read_choice().unwrap(), "2");
    }

    #[test]
    fn errors_go_to_the_error_stream() {
        let mut view = view("");
        view.error("Unknown option!").unwrap();

        let (out, err) = output(view);
        assert!(out.is_empty());
        assert_eq!(err, "\n>>> Unknown option! <<<\n\n");
    }
}
