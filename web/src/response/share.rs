use domain::share::SharedSummary;
use serde::Serialize;
use utoipa::ToSchema;

/// Successful share payload listing the recipients that were accepted.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ShareResponse {
    pub(crate) success: bool,
    pub(crate) message: String,
    /// The valid subset of the requested recipients, order preserved.
    pub(crate) recipients: Vec<String>,
    pub(crate) subject: String,
}

impl From<SharedSummary> for ShareResponse {
    fn from(shared: SharedSummary) -> Self {
        Self {
            success: shared.success,
            message: shared.message,
            recipients: shared.recipients,
            subject: shared.subject,
        }
    }
}
