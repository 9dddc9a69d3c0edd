use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{DomainErrorKind, Error as DomainError, InternalErrorKind};
use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// Every error leaves the endpoint boundary as a JSON body with a single
// `error` field. Validation messages describe the caller's own input and are
// safe to surface; everything else gets a generic message while the details
// stay in the server log.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        warn!("Request failed: {:?}", self.0);

        let (status, message) = match self.0.error_kind {
            DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                InternalErrorKind::Validation(message) => (StatusCode::BAD_REQUEST, message),
                InternalErrorKind::Config => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI provider API key is not configured".to_string(),
                ),
                InternalErrorKind::Other(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                ),
            },
            // Completion provider failures are reported as a plain 500; the
            // caller only learns that summary generation failed.
            DomainErrorKind::External(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate summary".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::error::ExternalErrorKind;

    fn response_for(error_kind: DomainErrorKind) -> Response {
        Error(DomainError {
            source: None,
            error_kind,
        })
        .into_response()
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = response_for(DomainErrorKind::Internal(InternalErrorKind::Validation(
            "Transcript or image is required".to_string(),
        )));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_config_maps_to_internal_server_error() {
        let response = response_for(DomainErrorKind::Internal(InternalErrorKind::Config));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_external_maps_to_internal_server_error() {
        let network = response_for(DomainErrorKind::External(ExternalErrorKind::Network));
        let other = response_for(DomainErrorKind::External(ExternalErrorKind::Other(
            "provider payload".to_string(),
        )));

        assert_eq!(network.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
