use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, arguments, description)
pub(crate) const SLASH_COMMANDS: &[(&str, &str, &str)] = &[
    ("/config", "", "Show current configuration"),
    ("/editor", "", "Compose a multi-line request in $EDITOR"),
    ("/help", "", "Show available commands"),
    ("/history", "", "Show the conversation so far"),
    ("/lang", "[name]", "Switch the target language"),
    ("/languages", "", "List supported languages"),
    ("/quit", "", "Exit chat mode"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _, _)| cmd.starts_with(input))
            .map(|(cmd, _, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Editor,
    Help,
    History,
    /// `/lang` with an optional language name; `None` opens a picker.
    Lang(Option<String>),
    Languages,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    // Requests are kept as typed; only commands are trimmed.
    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("config") => Input::Command(SlashCommand::Config),
        Some("editor") => Input::Command(SlashCommand::Editor),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("history") => Input::Command(SlashCommand::History),
        Some("lang") => {
            let name = (parts.len() > 1).then(|| parts[1..].join(" "));
            Input::Command(SlashCommand::Lang(name))
        }
        Some("languages") => Input::Command(SlashCommand::Languages),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}
