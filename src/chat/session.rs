//! Chat session state and its transitions.
//!
//! [`ChatSession`] owns the transcript and the view state. All changes go
//! through the methods here; the REPL only reads the result and renders it.

use crate::generation::{
    CodeGenerator, GenerationRequest, Language, RequestFailure, build_prompt,
};

use super::message::{Message, MessageBody, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingResponse,
}

/// Editable view state of a session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub draft: String,
    pub language: Language,
    pub phase: Phase,
}

/// How an in-flight request was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Answered,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub const fn enter() -> Self {
        Self {
            key: Key::Enter,
            shift: false,
        }
    }

    pub const fn shift_enter() -> Self {
        Self {
            key: Key::Enter,
            shift: true,
        }
    }

    pub const fn char(c: char) -> Self {
        Self {
            key: Key::Char(c),
            shift: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Enter submitted the draft; the request must now be issued.
    Submitted(GenerationRequest),
    /// Enter was pressed but the submission guard refused it.
    Rejected,
    NewLine,
    Edited,
}

#[derive(Debug, Default)]
pub struct ChatSession {
    transcript: Transcript,
    state: SessionState,
}

impl ChatSession {
    pub fn new(language: Language) -> Self {
        Self {
            transcript: Transcript::default(),
            state: SessionState {
                language,
                ..SessionState::default()
            },
        }
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn draft(&self) -> &str {
        &self.state.draft
    }

    pub const fn language(&self) -> Language {
        self.state.language
    }

    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.state.phase == Phase::AwaitingResponse
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
    }

    /// Changes the target language. Ignored while a request is in flight.
    pub fn select_language(&mut self, language: Language) -> bool {
        if self.is_awaiting_response() {
            return false;
        }
        self.state.language = language;
        true
    }

    /// Moves the draft into the transcript and returns the request to issue.
    ///
    /// Returns `None` without touching any state if the draft is blank or a
    /// request is already in flight.
    pub fn submit(&mut self) -> Option<GenerationRequest> {
        if self.is_awaiting_response() || self.state.draft.trim().is_empty() {
            return None;
        }

        let draft = std::mem::take(&mut self.state.draft);
        let language = self.state.language;
        let request = GenerationRequest {
            message: build_prompt(language, &draft),
            language,
        };

        self.transcript.push(Message::user(draft, language));
        self.state.phase = Phase::AwaitingResponse;
        Some(request)
    }

    /// Records the outcome of the in-flight request.
    ///
    /// Returns `None` if no request was in flight.
    pub fn complete(&mut self, result: Result<String, RequestFailure>) -> Option<Resolution> {
        if !self.is_awaiting_response() {
            return None;
        }

        let resolution = match result {
            Ok(text) => {
                let body = MessageBody::from_response(text, self.state.language);
                self.transcript.push(Message::bot(body));
                Resolution::Answered
            }
            Err(failure) => {
                tracing::warn!(error = %failure, "generation request failed");
                self.transcript.push(Message::failure());
                Resolution::Failed
            }
        };

        self.state.phase = Phase::Idle;
        Some(resolution)
    }

    /// Submits the draft, waits for the generator, and records the result.
    pub async fn exchange<G: CodeGenerator>(&mut self, generator: &G) -> Option<Resolution> {
        let request = self.submit()?;
        let result = generator.generate(&request).await;
        self.complete(result)
    }

    /// Applies a key press to the draft.
    ///
    /// Enter without shift behaves exactly like [`ChatSession::submit`];
    /// shift+Enter inserts a line break instead.
    pub fn handle_key(&mut self, press: KeyPress) -> KeyOutcome {
        match press.key {
            Key::Enter if press.shift => {
                self.state.draft.push('\n');
                KeyOutcome::NewLine
            }
            Key::Enter => self
                .submit()
                .map_or(KeyOutcome::Rejected, KeyOutcome::Submitted),
            Key::Char(c) => {
                self.state.draft.push(c);
                KeyOutcome::Edited
            }
            Key::Backspace => {
                self.state.draft.pop();
                KeyOutcome::Edited
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chat::message::{FAILURE_MESSAGE, Sender};

    struct FixedReply(&'static str);

    impl CodeGenerator for FixedReply {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, RequestFailure> {
            Ok(self.0.to_string())
        }
    }

    fn malformed() -> RequestFailure {
        serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into()
    }

    fn session_with_draft(draft: &str) -> ChatSession {
        let mut session = ChatSession::default();
        session.update_draft(draft);
        session
    }

    #[test]
    fn test_defaults() {
        let session = ChatSession::default();
        assert_eq!(session.language(), Language::Python);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.draft().is_empty());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_submit_appends_user_message_and_awaits() {
        let mut session = session_with_draft("reverse a string");

        let request = session.submit().unwrap();

        assert_eq!(request.message, "Generate Python code for: reverse a string");
        assert_eq!(request.language, Language::Python);
        assert!(session.is_awaiting_response());
        assert!(session.draft().is_empty());
        assert_eq!(session.transcript().len(), 1);

        let message = session.transcript().last().unwrap();
        assert_eq!(message.sender, Sender::User);
        assert_eq!(message.text(), "reverse a string");
        assert_eq!(message.language, Some(Language::Python));
    }

    #[test]
    fn test_submit_blank_draft_is_noop() {
        for draft in ["", "   ", "\n\t \n"] {
            let mut session = session_with_draft(draft);
            assert!(session.submit().is_none());
            assert_eq!(session.phase(), Phase::Idle);
            assert!(session.transcript().is_empty());
            assert_eq!(session.draft(), draft);
        }
    }

    #[test]
    fn test_submit_while_awaiting_is_noop() {
        let mut session = session_with_draft("first");
        session.submit().unwrap();

        session.update_draft("second");
        assert!(session.submit().is_none());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.draft(), "second");
        assert!(session.is_awaiting_response());
    }

    #[test]
    fn test_fenced_reply_becomes_code_message() {
        let mut session = session_with_draft("say hi");
        session.submit().unwrap();

        let resolution = session.complete(Ok("```python\nprint('hi')\n```".to_string()));

        assert_eq!(resolution, Some(Resolution::Answered));
        let reply = session.transcript().last().unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(
            reply.body,
            MessageBody::Code {
                language: "python".to_string(),
                content: "print('hi')".to_string(),
            }
        );
        assert!(!session.is_awaiting_response());
    }

    #[test]
    fn test_plain_reply_is_verbatim_text() {
        let mut session = session_with_draft("how do I loop?");
        session.submit().unwrap();

        session.complete(Ok("Just use a for loop.".to_string()));

        let reply = session.transcript().last().unwrap();
        assert_eq!(reply.body, MessageBody::Text("Just use a for loop.".to_string()));
        assert_eq!(reply.language, None);
    }

    #[test]
    fn test_failure_appends_fixed_message_and_returns_to_idle() {
        let mut session = session_with_draft("anything");
        session.submit().unwrap();

        let resolution = session.complete(Err(malformed()));

        assert_eq!(resolution, Some(Resolution::Failed));
        assert_eq!(session.transcript().last().unwrap().text(), FAILURE_MESSAGE);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_complete_without_request_is_noop() {
        let mut session = ChatSession::default();
        assert_eq!(session.complete(Ok("stray".to_string())), None);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_submit_accepted_after_each_resolution() {
        let mut session = session_with_draft("one");
        session.submit().unwrap();
        session.complete(Err(malformed()));

        session.update_draft("two");
        assert!(session.submit().is_some());
        session.complete(Ok("done".to_string()));

        session.update_draft("three");
        assert!(session.submit().is_some());
    }

    #[test]
    fn test_transcript_is_insertion_ordered_and_unchanged() {
        let mut session = session_with_draft("one");
        session.submit().unwrap();
        session.complete(Ok("reply one".to_string()));
        let snapshot: Vec<Message> = session.transcript().iter().cloned().collect();

        session.update_draft("two");
        session.submit().unwrap();
        session.complete(Err(malformed()));

        let texts: Vec<&str> = session.transcript().iter().map(Message::text).collect();
        assert_eq!(texts, ["one", "reply one", "two", FAILURE_MESSAGE]);
        assert_eq!(&session.transcript().iter().cloned().collect::<Vec<_>>()[..2], &snapshot[..]);
    }

    #[test]
    fn test_select_language_disabled_while_awaiting() {
        let mut session = ChatSession::default();
        assert!(session.select_language(Language::Java));
        assert_eq!(session.language(), Language::Java);

        session.update_draft("hello world");
        session.submit().unwrap();
        assert!(!session.select_language(Language::TypeScript));
        assert_eq!(session.language(), Language::Java);

        session.complete(Ok("```java\nclass A {}\n```".to_string()));
        assert!(matches!(
            session.transcript().last().unwrap().body,
            MessageBody::Code { ref language, .. } if language == "java"
        ));
        assert!(session.select_language(Language::TypeScript));
    }

    #[test]
    fn test_draft_is_sent_untrimmed() {
        let mut session = ChatSession::new(Language::Cpp);
        session.update_draft("  quicksort  ");
        let request = session.submit().unwrap();
        assert_eq!(request.message, "Generate C++ code for:   quicksort  ");
        assert_eq!(session.transcript().last().unwrap().text(), "  quicksort  ");
    }

    #[test]
    fn test_enter_submits() {
        let mut session = session_with_draft("fizzbuzz");
        let outcome = session.handle_key(KeyPress::enter());
        assert!(matches!(outcome, KeyOutcome::Submitted(ref r) if r.message.ends_with("fizzbuzz")));
        assert!(session.is_awaiting_response());
    }

    #[test]
    fn test_enter_on_blank_draft_is_rejected() {
        let mut session = ChatSession::default();
        assert_eq!(session.handle_key(KeyPress::enter()), KeyOutcome::Rejected);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        let mut session = ChatSession::default();
        for c in "line one".chars() {
            session.handle_key(KeyPress::char(c));
        }
        assert_eq!(session.handle_key(KeyPress::shift_enter()), KeyOutcome::NewLine);
        session.handle_key(KeyPress::char('x'));
        session.handle_key(KeyPress::char('y'));
        session.handle_key(KeyPress {
            key: Key::Backspace,
            shift: false,
        });

        assert_eq!(session.draft(), "line one\nx");
        assert!(session.transcript().is_empty());
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test]
    async fn test_exchange_runs_full_cycle() {
        let mut session = session_with_draft("hello");
        let resolution = session.exchange(&FixedReply("```\necho hi\n```")).await;

        assert_eq!(resolution, Some(Resolution::Answered));
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript().last().unwrap().text(), "echo hi");
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_exchange_with_blank_draft_does_nothing() {
        let mut session = ChatSession::default();
        assert_eq!(session.exchange(&FixedReply("unused")).await, None);
        assert!(session.transcript().is_empty());
    }
}
