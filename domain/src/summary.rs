//! Meeting summary generation.
//!
//! Builds the prompt from the caller's transcript or image plus an optional
//! custom instruction string, then makes a single completion call. No
//! retries, no streaming; the generated text is returned verbatim.

use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use crate::gateway::groq::{
    ChatCompletionRequest, ChatMessage, ContentPart, GroqClient, ImageUrl, MessageContent,
};
use log::*;
use service::config::Config;

/// Inputs for one summarization request. At least one of `transcript` or
/// `image` must be present; empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct NewSummary {
    pub transcript: Option<String>,
    /// Inline image data, as a base64 data URL.
    pub image: Option<String>,
    pub custom_prompt: Option<String>,
}

const IMAGE_PROMPT_INSTRUCTIONS: &str = "I have uploaded a screenshot/image that contains meeting notes, text, or other content. Please analyze this image and extract all readable text content, then provide a well-structured summary based on the instructions above.\n\nNote: This is an image that may contain handwritten notes, typed text, screenshots of documents, or other visual content that needs to be processed and summarized.";

const TRANSCRIPT_PROMPT_FOOTER: &str =
    "Please provide a well-structured summary based on the instructions above.";

/// Generate a summary for the given transcript or image.
pub async fn generate(config: &Config, params: NewSummary) -> Result<String, Error> {
    // Fail closed before looking at the request when no credential is present
    let api_key = config.groq_api_key().ok_or_else(|| {
        error!("Groq API key not found in process configuration");
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    })?;

    let params = NewSummary {
        transcript: params.transcript.filter(|t| !t.is_empty()),
        image: params.image.filter(|i| !i.is_empty()),
        custom_prompt: params.custom_prompt,
    };

    if params.transcript.is_none() && params.image.is_none() {
        return Err(Error::validation("Transcript or image is required"));
    }

    let prompt = build_prompt(&params);
    debug!("Built summarization prompt ({} chars)", prompt.len());

    let message = match params.image {
        Some(image) => ChatMessage {
            role: "user",
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: prompt },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: image },
                },
            ]),
        },
        None => ChatMessage {
            role: "user",
            content: MessageContent::Text(prompt),
        },
    };

    let client = GroqClient::new(&api_key, config.groq_base_url())?;
    let request = ChatCompletionRequest {
        model: config.groq_model().to_string(),
        messages: vec![message],
        max_tokens: config.max_completion_tokens,
    };

    let summary = client.complete(request).await?;
    info!("Successfully generated summary");

    Ok(summary)
}

/// Assemble the textual prompt sent to the completion provider.
fn build_prompt(params: &NewSummary) -> String {
    let custom_prompt = params.custom_prompt.as_deref().unwrap_or_default();

    if params.image.is_some() {
        format!("{custom_prompt}\n\n{IMAGE_PROMPT_INSTRUCTIONS}")
    } else {
        format!(
            "{custom_prompt}\n\nMeeting Transcript:\n{}\n\n{TRANSCRIPT_PROMPT_FOOTER}",
            params.transcript.as_deref().unwrap_or_default()
        )
    }
}
