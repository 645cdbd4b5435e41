use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;

use super::{Language, RequestFailure};

/// One outbound request, built by the chat session on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// The full prompt sent to the endpoint.
    pub message: String,
    /// The language hint.
    pub language: Language,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    message: &'a str,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Something that can turn a [`GenerationRequest`] into reply text.
pub trait CodeGenerator {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, RequestFailure>> + Send;
}

/// HTTP client for the code generation endpoint.
pub struct CodeGenClient {
    client: Client,
    endpoint: String,
}

impl CodeGenClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CodeGenerator for CodeGenClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, RequestFailure> {
        let body = GenerateRequest {
            message: &request.message,
            language: request.language.name(),
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            language = %request.language,
            "sending generation request"
        );

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestFailure::Status { status, body });
        }

        let text = response.text().await?;
        parse_response(&text)
    }
}

fn parse_response(body: &str) -> Result<String, RequestFailure> {
    let parsed: GenerateResponse = serde_json::from_str(body)?;
    Ok(parsed.response)
}
