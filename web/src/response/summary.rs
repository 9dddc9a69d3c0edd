use serde::Serialize;
use utoipa::ToSchema;

/// Successful summarization payload: the generated text, verbatim.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct SummaryResponse {
    pub(crate) summary: String,
}
