//! Transcript messages.

use crate::generation::{Language, fence};

/// Shown in place of a reply when the request could not be completed.
pub const FAILURE_MESSAGE: &str =
    "Failed to get response. Please check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    /// Code extracted from a fenced reply, tagged with the lower-cased language.
    Code { language: String, content: String },
}

impl MessageBody {
    /// Builds a bot reply body from the endpoint's response text.
    pub fn from_response(text: String, language: Language) -> Self {
        if fence::has_code_fence(&text) {
            Self::Code {
                language: language.tag(),
                content: fence::strip_code_fences(&text),
            }
        } else {
            Self::Text(text)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Code { content, .. } => content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub body: MessageBody,
    /// Only set on user messages.
    pub language: Option<Language>,
}

impl Message {
    pub const fn user(text: String, language: Language) -> Self {
        Self {
            sender: Sender::User,
            body: MessageBody::Text(text),
            language: Some(language),
        }
    }

    pub const fn bot(body: MessageBody) -> Self {
        Self {
            sender: Sender::Bot,
            body,
            language: None,
        }
    }

    pub fn failure() -> Self {
        Self::bot(MessageBody::Text(FAILURE_MESSAGE.to_string()))
    }

    pub fn text(&self) -> &str {
        self.body.as_str()
    }
}

/// Append-only, insertion-ordered list of messages.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_response_becomes_code() {
        let body =
            MessageBody::from_response("```python\nprint('hi')\n```".to_string(), Language::Python);
        assert_eq!(
            body,
            MessageBody::Code {
                language: "python".to_string(),
                content: "print('hi')".to_string(),
            }
        );
    }

    #[test]
    fn test_plain_response_is_kept_verbatim() {
        let body = MessageBody::from_response("Just use a for loop.".to_string(), Language::Python);
        assert_eq!(body, MessageBody::Text("Just use a for loop.".to_string()));
    }

    #[test]
    fn test_plain_response_is_not_trimmed() {
        let body = MessageBody::from_response("  spaced  \n".to_string(), Language::Java);
        assert_eq!(body.as_str(), "  spaced  \n");
    }

    #[test]
    fn test_code_tag_follows_selected_language() {
        let body = MessageBody::from_response("```\nint x;\n```".to_string(), Language::Cpp);
        assert!(matches!(body, MessageBody::Code { ref language, .. } if language == "c++"));
    }

    #[test]
    fn test_user_message_carries_language() {
        let message = Message::user("sort a list".to_string(), Language::TypeScript);
        assert_eq!(message.sender, Sender::User);
        assert_eq!(message.language, Some(Language::TypeScript));
        assert_eq!(message.text(), "sort a list");
    }

    #[test]
    fn test_failure_message() {
        let message = Message::failure();
        assert_eq!(message.sender, Sender::Bot);
        assert_eq!(message.language, None);
        assert_eq!(message.text(), FAILURE_MESSAGE);
    }

    #[test]
    fn test_transcript_keeps_insertion_order() {
        let mut transcript = Transcript::default();
        assert!(transcript.is_empty());

        transcript.push(Message::user("one".to_string(), Language::Python));
        transcript.push(Message::bot(MessageBody::Text("two".to_string())));
        transcript.push(Message::user("three".to_string(), Language::Java));

        let texts: Vec<&str> = transcript.iter().map(Message::text).collect();
        assert_eq!(texts, ["one", "two", "three"]);
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.last().map(Message::text), Some("three"));
    }
}
