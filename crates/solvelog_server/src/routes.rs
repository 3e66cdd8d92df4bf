//! Router assembly and cross-cutting HTTP layers.
//!
//! # Responsibility
//! - Wire endpoints to handlers.
//! - Apply CORS policy and the request body size cap.

use crate::handlers::{health, journal};
use crate::state::SharedState;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use log::warn;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Request bodies above this size are rejected before decoding.
pub const MAX_BODY_BYTES: usize = 1_048_576;

const CORS_MAX_AGE: Duration = Duration::from_secs(300);

/// Builds the service router with all layers applied.
pub fn build_router(state: SharedState) -> Router {
    let cors = build_cors_layer(&state.config.frontend_url);

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/journal",
            get(journal::get_journal_entries).post(journal::add_journal_entry),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(frontend_origin: &str) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
        ])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE);

    match HeaderValue::from_str(frontend_origin) {
        Ok(origin) => layer = layer.allow_origin(origin),
        Err(err) => warn!(
            "event=cors_config module=server status=skip reason=invalid_origin error={err}"
        ),
    }

    layer
}
