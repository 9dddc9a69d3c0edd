//! HTTP layer: axum router, controllers and error translation.

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use log::*;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub(crate) mod controller;
pub(crate) mod error;
pub(crate) mod params;
pub(crate) mod response;
pub mod router;

pub use error::{Error, Result};
pub use service::AppState;

/// Bind the listener and serve the router until the process is stopped.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let server_url = format!("{}:{}", app_state.config.interface, app_state.config.port);

    let router = router::define_routes(app_state.clone()).layer(cors_layer(&app_state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    info!("Server starting... listening for requests on http://{server_url}");

    axum::serve(listener, router).await
}

/// Restrict cross-origin requests to the configured origin list.
fn cors_layer(app_state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = app_state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Skipping invalid CORS origin {origin}: {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(AllowOrigin::list(allowed_origins))
}
