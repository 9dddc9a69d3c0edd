//! Groq API client for chat completions.
//!
//! Groq exposes an OpenAI-compatible wire format: a single POST to
//! `/chat/completions` with a list of messages. Messages carry either plain
//! text content or a list of content parts when an inline image rides along.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind, InternalErrorKind};
use log::*;
use serde::{Deserialize, Serialize};

/// Request to create a chat completion
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// A single chat message
#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: MessageContent,
}

/// Message content: plain text, or multi-part for text paired with an image
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// One part of a multi-part message
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

/// Inline image reference, as a data URL or a fetchable URL
#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Response from a chat completion request
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

/// A single generated choice
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

/// The assistant message within a choice
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Groq API client
pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
}

impl GroqClient {
    /// Create a new Groq client with the given API key and base URL
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, Error> {
        let mut headers = reqwest::header::HeaderMap::new();

        let auth_value = format!("Bearer {api_key}");
        let mut header_value =
            reqwest::header::HeaderValue::from_str(&auth_value).map_err(|e| {
                warn!("Failed to create auth header: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                        "Invalid API key format".to_string(),
                    )),
                }
            })?;
        header_value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, header_value);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Request a chat completion and return the generated text verbatim
    pub async fn complete(&self, request: ChatCompletionRequest) -> Result<String, Error> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!("Requesting chat completion from model: {}", request.model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach completion provider: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
                }
            })?;

        if response.status().is_success() {
            let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse completion response: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                        "Invalid response from completion provider".to_string(),
                    )),
                }
            })?;

            let text = completion
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| {
                    warn!("Completion response contained no choices");
                    Error {
                        source: None,
                        error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                            "Completion response contained no choices".to_string(),
                        )),
                    }
                })?;

            info!("Received completion ({} chars)", text.len());
            Ok(text)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Completion provider API: {} - {}", status, error_text);
            Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Other(error_text)),
            })
        }
    }
}
