//! Console front end: a text view over stdin/stdout and the menu loop that
//! drives it.

mod app;
mod helpers;
mod terminal;
mod view;

pub use app::{App, Command, SessionState, UnknownOption};
pub use helpers::surface_error;
pub use terminal::{run_app, wait_for_any_key};
pub use view::{Acknowledge, InputClosed, View};
