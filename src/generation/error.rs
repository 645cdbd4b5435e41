use thiserror::Error;

/// Any failure while exchanging a request with the code generation endpoint.
///
/// The variants exist for diagnostics only; the chat session reports all of
/// them to the user the same way.
#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("failed to reach code generation endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
