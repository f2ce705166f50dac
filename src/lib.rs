//! Core library surface for the player manager.
//!
//! The binary target only parses arguments and wires these pieces together,
//! so scripted sessions and tests can drive the same code.
pub mod config;
pub mod loader;
pub mod logging;
pub mod models;
pub mod roster;
pub mod ui;

/// Seed file loading.
pub use loader::{load_players, parse_players, Diagnostic, LoadError, LoadReport};

/// Domain types.
pub use models::{Player, PlayerOrder};
pub use roster::Roster;

/// The menu loop and its console view.
pub use ui::{run_app, App, View};
