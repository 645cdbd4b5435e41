//! Chat sessions with a code generation endpoint.
//!
//! [`ChatSession`] holds the transcript and view state as plain data with
//! explicit transitions; [`ChatRepl`] is the terminal front end driving it.

/// Slash command parsing and autocomplete.
pub mod command;
mod message;
mod repl;
mod session;
mod ui;

pub use message::{FAILURE_MESSAGE, Message, MessageBody, Sender, Transcript};
pub use repl::ChatRepl;
pub use session::{ChatSession, Key, KeyOutcome, KeyPress, Phase, Resolution, SessionState};
pub use ui::render_message;
