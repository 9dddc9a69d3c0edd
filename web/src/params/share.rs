use serde::Deserialize;
use utoipa::ToSchema;

/// Body of a share request. Missing fields deserialize to their empty values
/// so that the domain layer rejects them with a caller-friendly message
/// instead of a deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ShareParams {
    /// The summary text to deliver.
    #[serde(default)]
    pub(crate) summary: String,
    /// Recipient email addresses, in delivery order.
    #[serde(default)]
    pub(crate) recipients: Vec<String>,
}
