use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Editor, Text};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::session::{ChatSession, KeyOutcome, KeyPress};
use super::ui;
use crate::generation::{CodeGenClient, CodeGenerator, GenerationRequest, Language, print_languages};
use crate::ui::{Spinner, cancellable, pick_language};

/// Continuation marker: a line ending in a backslash is shift+Enter.
const LINE_CONTINUATION: char = '\\';

/// What a typed line did to the session.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineOutcome {
    /// A slash command typed at the start of a draft.
    Command(SlashCommand),
    /// The line ended in the continuation marker; the draft goes on.
    Continue,
    /// Enter submitted the draft.
    Submitted(GenerationRequest),
    /// Enter was refused by the session.
    Rejected,
}

/// Feeds one terminal line into the session as key presses.
///
/// Commands are only recognized on the first line of a draft, so a
/// continuation line starting with `/` is request text.
pub(crate) fn feed_line(session: &mut ChatSession, line: &str) -> LineOutcome {
    if session.draft().is_empty()
        && let Input::Command(cmd) = parse_input(line)
    {
        return LineOutcome::Command(cmd);
    }

    if let Some(head) = line.strip_suffix(LINE_CONTINUATION) {
        append_to_draft(session, head);
        session.handle_key(KeyPress::shift_enter());
        return LineOutcome::Continue;
    }

    append_to_draft(session, line);
    match session.handle_key(KeyPress::enter()) {
        KeyOutcome::Submitted(request) => LineOutcome::Submitted(request),
        _ => {
            // A blank multi-line draft is dropped rather than kept around.
            if session.draft().trim().is_empty() {
                session.update_draft(String::new());
            }
            LineOutcome::Rejected
        }
    }
}

fn append_to_draft(session: &mut ChatSession, text: &str) {
    let draft = format!("{}{text}", session.draft());
    session.update_draft(draft);
}

/// Interactive chat loop around a [`ChatSession`].
pub struct ChatRepl<G = CodeGenClient> {
    session: ChatSession,
    generator: G,
    endpoint: String,
}

impl ChatRepl<CodeGenClient> {
    pub fn new(endpoint: String, language: Language) -> Self {
        let generator = CodeGenClient::new(endpoint.clone());
        Self::with_generator(generator, endpoint, language)
    }
}

impl<G: CodeGenerator> ChatRepl<G> {
    pub fn with_generator(generator: G, endpoint: String, language: Language) -> Self {
        Self {
            session: ChatSession::new(language),
            generator,
            endpoint,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        if self.session.transcript().is_empty() {
            ui::print_welcome(self.session.language());
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let continuation_style = Styled::new("…").with_fg(Color::Grey);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let continuing = !self.session.draft().is_empty();
            let placeholder = format!("Ask for {} code...", self.session.language());
            let config = if continuing {
                render_config
                    .with_prompt_prefix(continuation_style)
                    .with_answered_prompt_prefix(continuation_style)
            } else {
                render_config
            };

            let line = Text::new("")
                .with_render_config(config)
                .with_placeholder(&placeholder)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Enter to send, end a line with \\ for a new line, /help for commands")
                .prompt();

            let Some(line) = cancellable(line)? else {
                break;
            };

            match feed_line(&mut self.session, &line) {
                LineOutcome::Command(cmd) => {
                    if !self.handle_command(cmd).await? {
                        break;
                    }
                }
                LineOutcome::Submitted(request) => self.generate_and_print(&request).await,
                LineOutcome::Continue | LineOutcome::Rejected => {}
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the loop should stop.
    async fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.endpoint, self.session.language()),
            SlashCommand::Editor => self.compose_in_editor().await?,
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => ui::print_transcript(self.session.transcript()),
            SlashCommand::Lang(name) => self.switch_language(name.as_deref())?,
            SlashCommand::Languages => print_languages(self.session.language(), "current"),
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        Ok(true)
    }

    fn switch_language(&mut self, name: Option<&str>) -> Result<()> {
        let language = match name {
            Some(name) => match name.parse::<Language>() {
                Ok(language) => language,
                Err(e) => {
                    ui::print_error(&e.to_string());
                    return Ok(());
                }
            },
            None => match pick_language("Programming language:", self.session.language())? {
                Some(language) => language,
                None => return Ok(()),
            },
        };

        if self.session.select_language(language) {
            ui::print_language_set(language);
        } else {
            ui::print_error("Cannot change language while a request is in flight");
        }
        Ok(())
    }

    async fn compose_in_editor(&mut self) -> Result<()> {
        let answer = Editor::new("Request:")
            .with_help_message("Save and close the editor to send")
            .prompt();
        let Some(text) = cancellable(answer)? else {
            return Ok(());
        };

        self.session.update_draft(text);
        match self.session.submit() {
            Some(request) => self.generate_and_print(&request).await,
            None => ui::print_error("Request is empty"),
        }
        Ok(())
    }

    async fn generate_and_print(&mut self, request: &GenerationRequest) {
        let spinner = Spinner::new(&format!("Generating {} code...", request.language));
        let result = self.generator.generate(request).await;
        spinner.stop();

        self.session.complete(result);
        if let Some(reply) = self.session.transcript().last() {
            ui::print_message(reply);
        }
    }
}
