//! Terminal UI building blocks shared by the chat REPL and the commands.

use anyhow::Result;
use inquire::{InquireError, Select};

use crate::generation::{Language, SUPPORTED_LANGUAGES};

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Settles the result of an `inquire` prompt.
///
/// Ctrl+C and Escape become `Ok(None)` so callers can back out quietly;
/// any other prompt error is propagated.
pub(crate) fn cancellable<T>(answer: Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            // The cancelled prompt leaves the cursor mid-line.
            println!();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Asks for a language with the cursor on `current`.
///
/// Returns `None` when the picker is cancelled.
pub(crate) fn pick_language(message: &str, current: Language) -> Result<Option<Language>> {
    cancellable(
        Select::new(message, SUPPORTED_LANGUAGES.to_vec())
            .with_starting_cursor(language_cursor(current))
            .prompt(),
    )
}

fn language_cursor(current: Language) -> usize {
    SUPPORTED_LANGUAGES
        .iter()
        .position(|lang| *lang == current)
        .unwrap_or(0)
}
