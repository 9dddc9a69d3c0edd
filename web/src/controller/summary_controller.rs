use crate::params::summary::SummaryParams;
use crate::response::summary::SummaryResponse;
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::summary::{self as SummaryApi, NewSummary};
use log::*;

/// POST generate a summary from a meeting transcript or an uploaded image
#[utoipa::path(
    post,
    path = "/api/summarize",
    request_body = SummaryParams,
    responses(
        (status = 200, description = "Successfully generated a summary", body = SummaryResponse),
        (status = 400, description = "Neither a transcript nor an image was provided"),
        (status = 500, description = "Provider key missing or completion request failed")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(params): Json<SummaryParams>,
) -> Result<impl IntoResponse, Error> {
    debug!(
        "POST summarize (transcript: {} chars, image: {}, custom prompt: {})",
        params.transcript.as_deref().map_or(0, str::len),
        params.image.is_some(),
        params.custom_prompt.is_some(),
    );

    let summary = SummaryApi::generate(
        &app_state.config,
        NewSummary {
            transcript: params.transcript,
            image: params.image,
            custom_prompt: params.custom_prompt,
        },
    )
    .await?;

    Ok(Json(SummaryResponse { summary }))
}

#[cfg(test)]
mod tests {
    use crate::router::define_routes;
    use crate::AppState;
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use clap::Parser;
    use http_body_util::BodyExt;
    use mockito::Server;
    use serde_json::{json, Value};
    use serial_test::serial;
    use service::config::Config;
    use std::env;
    use tower::util::ServiceExt;

    fn test_app_state(args: &[&str]) -> AppState {
        let mut argv = vec!["web"];
        argv.extend_from_slice(args);
        AppState::new(Config::parse_from(argv))
    }

    fn summarize_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/summarize")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> anyhow::Result<Value> {
        let bytes = response.into_body().collect().await?.to_bytes();
        Ok(serde_json::from_slice(&bytes)?)
    }

    #[tokio::test]
    #[serial]
    async fn test_create_returns_provider_summary() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test_key")
            .with_status(200)
            .with_body(
                json!({
                    "choices": [{ "message": { "role": "assistant", "content": "Decisions were made." } }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let router = define_routes(test_app_state(&[
            "--groq-api-key",
            "test_key",
            "--groq-base-url",
            &server.url(),
        ]));

        let response = router
            .oneshot(summarize_request(json!({
                "transcript": "Alice: decisions were made.",
                "customPrompt": "Focus on decisions."
            })))
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await?;
        assert_eq!(body, json!({ "summary": "Decisions were made." }));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_create_requires_transcript_or_image() -> anyhow::Result<()> {
        let router = define_routes(test_app_state(&["--groq-api-key", "test_key"]));

        let response = router
            .oneshot(summarize_request(json!({ "customPrompt": "Summarize." })))
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await?;
        assert_eq!(body, json!({ "error": "Transcript or image is required" }));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_create_fails_closed_without_provider_key() -> anyhow::Result<()> {
        env::remove_var("GROQ_API_KEY");
        let router = define_routes(test_app_state(&[]));

        let response = router
            .oneshot(summarize_request(json!({ "transcript": "Met at 3pm" })))
            .await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await?;
        assert_eq!(
            body,
            json!({ "error": "AI provider API key is not configured" })
        );

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_create_hides_provider_failure_details() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body(json!({ "error": { "message": "internal provider detail" } }).to_string())
            .create_async()
            .await;

        let router = define_routes(test_app_state(&[
            "--groq-api-key",
            "test_key",
            "--groq-base-url",
            &server.url(),
        ]));

        let response = router
            .oneshot(summarize_request(json!({ "transcript": "Met at 3pm" })))
            .await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await?;
        assert_eq!(body, json!({ "error": "Failed to generate summary" }));

        Ok(())
    }
}
