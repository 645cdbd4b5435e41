//! One-shot request: a single exchange through a chat session.

use anyhow::Result;

use super::load_resolved_config;
use crate::chat::{ChatSession, Resolution, render_message};
use crate::config::ResolveOptions;
use crate::generation::{CodeGenClient, CodeGenerator, Language};
use crate::ui::Spinner;

/// Runs one request and prints the reply.
///
/// Returns the process exit code: `exitcode::OK` on an answer,
/// `exitcode::UNAVAILABLE` when the request failed.
pub async fn run_ask(request: &str, options: &ResolveOptions) -> Result<exitcode::ExitCode> {
    let config = load_resolved_config(options)?;
    let client = CodeGenClient::new(config.endpoint);
    Ok(ask_with(&client, config.language, request).await)
}

async fn ask_with<G: CodeGenerator>(
    generator: &G,
    language: Language,
    request: &str,
) -> exitcode::ExitCode {
    let mut session = ChatSession::new(language);
    session.update_draft(request);

    let spinner = Spinner::new(&format!("Generating {language} code..."));
    let resolution = session.exchange(generator).await;
    spinner.stop();

    if let Some(reply) = session.transcript().last().filter(|_| resolution.is_some()) {
        print!("{}", render_message(reply));
    }

    match resolution {
        Some(Resolution::Answered) => exitcode::OK,
        Some(Resolution::Failed) => exitcode::UNAVAILABLE,
        None => exitcode::USAGE,
    }
}
