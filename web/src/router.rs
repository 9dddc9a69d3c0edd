use crate::controller::{health_check_controller, share_controller, summary_controller};
use crate::{params, response, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Meeting Notes Summarizer API"
        ),
        paths(
            summary_controller::create,
            share_controller::create,
            health_check_controller::health_check,
        ),
        components(
            schemas(
                params::summary::SummaryParams,
                params::share::ShareParams,
                response::summary::SummaryResponse,
                response::share::ShareResponse,
            )
        ),
        tags(
            (name = "meeting_summarizer", description = "Meeting transcript summarization & sharing API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(summary_routes(app_state.clone()))
        .merge(share_routes(app_state))
        .merge(health_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .fallback_service(static_routes())
}

pub fn summary_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(summary_controller::create))
        .with_state(app_state)
}

pub fn share_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/share", post(share_controller::create))
        .with_state(app_state)
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

// The browser client is a static page served as the fallback for any path
// the API does not claim.
fn static_routes() -> ServeDir {
    ServeDir::new("./public")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use clap::Parser;
    use service::config::Config;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_route_responds() {
        let router = define_routes(AppState::new(Config::parse_from(["web"])));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let router = define_routes(AppState::new(Config::parse_from(["web"])));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
