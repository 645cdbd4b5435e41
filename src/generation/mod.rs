mod client;
mod error;
pub mod fence;
mod language;
mod prompt;

pub use client::{CodeGenClient, CodeGenerator, GenerationRequest};
pub use error::RequestFailure;
pub use language::{Language, SUPPORTED_LANGUAGES, print_languages, render_languages};
pub use prompt::build_prompt;
