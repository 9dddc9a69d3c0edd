use crate::params::share::ShareParams;
use crate::response::share::ShareResponse;
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::share as ShareApi;
use log::*;

/// POST share a summary with a list of email recipients (stub delivery)
#[utoipa::path(
    post,
    path = "/api/share",
    request_body = ShareParams,
    responses(
        (status = 200, description = "Summary accepted for delivery", body = ShareResponse),
        (status = 400, description = "Missing summary/recipients, or no valid email addresses")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(params): Json<ShareParams>,
) -> Result<impl IntoResponse, Error> {
    debug!(
        "POST share summary to {} requested recipient(s)",
        params.recipients.len()
    );

    let shared = ShareApi::share(&app_state.config, &params.summary, params.recipients).await?;

    Ok(Json(ShareResponse::from(shared)))
}
