//! Health check endpoint.

use crate::envelope::success;
use crate::state::SharedState;
use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthData {
    status: &'static str,
    version: &'static str,
    llm_model: String,
    llm_configured: bool,
}

/// `GET /health` — liveness plus basic dependency diagnostics.
pub async fn health_check(State(state): State<SharedState>) -> Response {
    success(
        "health check",
        Some(HealthData {
            status: "ok",
            version: solvelog_core::core_version(),
            llm_model: state.llm.model().to_string(),
            llm_configured: state.llm.is_configured(),
        }),
    )
}
