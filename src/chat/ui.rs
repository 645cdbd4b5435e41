//! Chat mode UI components.

use std::fmt::Write as _;

use crate::generation::Language;
use crate::ui::Style;

use super::command::SLASH_COMMANDS;
use super::message::{Message, MessageBody, Sender, Transcript};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - AI Code Assistant",
        Style::header("codechat"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_welcome(language: Language) {
    println!("{}", Style::bot("assistant"));
    println!("  Hello! I'm your AI coding assistant.");
    println!("  Ask me to generate code in any supported language.");
    println!(
        "  {}",
        Style::hint(format!(
            "Example: \"Show me how to implement quicksort in {language}\""
        ))
    );
    println!(
        "  {}",
        Style::hint("End a line with \\ to continue your request on the next line.")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

/// Renders a single transcript message as terminal text.
pub fn render_message(message: &Message) -> String {
    let mut out = String::new();

    match message.sender {
        Sender::User => {
            let badge = message
                .language
                .map(|lang| format!(" [{}]", Style::code(lang)))
                .unwrap_or_default();
            let _ = writeln!(out, "{}{badge}", Style::user("you"));
        }
        Sender::Bot => {
            let _ = writeln!(out, "{}", Style::bot("assistant"));
        }
    }

    match &message.body {
        MessageBody::Text(text) => {
            for line in text.lines() {
                let _ = writeln!(out, "  {line}");
            }
        }
        MessageBody::Code { language, content } => {
            let _ = writeln!(out, "  {}", Style::code(format!("── {language} ──")));
            for line in content.lines() {
                let _ = writeln!(out, "  {line}");
            }
            let _ = writeln!(out, "  {}", Style::code("──"));
        }
    }

    out
}

pub fn print_message(message: &Message) {
    println!("{}", render_message(message));
}

pub fn print_transcript(transcript: &Transcript) {
    if transcript.is_empty() {
        println!("{}", Style::secondary("No messages yet."));
        println!();
        return;
    }
    for message in transcript {
        print_message(message);
    }
}

pub fn print_config(endpoint: &str, language: Language) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(endpoint)
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        Style::value(language)
    );
    println!();
}

pub fn print_language_set(language: Language) {
    println!(
        "{} Language set to {}",
        Style::success("✓"),
        Style::value(language)
    );
    println!();
}

/// Renders the slash command reference.
pub fn render_help() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", Style::header("Available commands"));
    for (command, args, description) in SLASH_COMMANDS {
        let usage = format!("{command} {args}");
        let _ = writeln!(
            out,
            "  {}  {}",
            Style::command(format!("{:<12}", usage.trim_end())),
            Style::secondary(description)
        );
    }
    out
}

pub fn print_help() {
    println!("{}", render_help());
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::FAILURE_MESSAGE;

    #[test]
    fn test_render_user_message_has_language_badge() {
        let rendered = render_message(&Message::user("sort it".to_string(), Language::Java));
        assert!(rendered.contains("you"));
        assert!(rendered.contains("Java"));
        assert!(rendered.contains("  sort it"));
    }

    #[test]
    fn test_render_code_message() {
        let message = Message::bot(MessageBody::Code {
            language: "python".to_string(),
            content: "def f():\n    return 1".to_string(),
        });
        let rendered = render_message(&message);
        assert!(rendered.contains("python"));
        assert!(rendered.contains("  def f():\n      return 1\n"));
    }

    #[test]
    fn test_help_lists_every_slash_command() {
        let help = render_help();
        for (command, _, description) in SLASH_COMMANDS {
            assert!(help.contains(command), "missing {command}");
            assert!(help.contains(description), "missing help for {command}");
        }
        assert!(help.contains("/lang [name]"));
    }

    #[test]
    fn test_render_failure_message() {
        let rendered = render_message(&Message::failure());
        assert!(rendered.contains("assistant"));
        assert!(rendered.contains(FAILURE_MESSAGE));
    }
}
