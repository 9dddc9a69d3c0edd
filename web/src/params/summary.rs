use serde::Deserialize;
use utoipa::ToSchema;

/// Body of a summarization request. At least one of `transcript` or `image`
/// must be present; `customPrompt` is prepended to the generated prompt.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryParams {
    /// Raw meeting transcript text.
    pub(crate) transcript: Option<String>,
    /// Uploaded image as an inline base64 data URL.
    pub(crate) image: Option<String>,
    /// Custom summarization instructions.
    pub(crate) custom_prompt: Option<String>,
}
