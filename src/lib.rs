//! # codechat - AI code assistant for the terminal
//!
//! `codechat` sends natural-language requests to a code generation endpoint
//! and shows the generated code in a chat transcript.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive chat (Python by default)
//! codechat
//!
//! # Pick a language and endpoint
//! codechat --language TypeScript --endpoint http://localhost:8000/autogen-chat
//!
//! # One-shot request
//! codechat ask "binary search over a sorted slice" --language C++
//! ```
//!
//! ## Wire contract
//!
//! `POST {endpoint}` with `{"message": "...", "language": "..."}`, answered
//! by `{"response": "..."}`. Fenced replies are shown as code.
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/codechat/config.toml`:
//!
//! ```toml
//! [codechat]
//! endpoint = "http://localhost:8000/autogen-chat"
//! language = "Python"
//! ```

/// Chat session state and the interactive REPL.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Code generation client, languages, and reply formatting.
pub mod generation;

/// Global output configuration and logging.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
