//! Health endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub rules_dir: String,
    /// Whether the rules directory could be listed just now.
    pub rules_dir_readable: bool,
    /// Number of rules, when the directory is readable.
    pub rule_count: Option<usize>,
    /// Effective configuration.
    #[schema(value_type = Object)]
    pub config: serde_json::Value,
}

/// Report liveness and whether the rules directory is usable. Always 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let rule_count = state.store.list().ok().map(|names| names.len());
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        rules_dir: state.store.rules_dir().display().to_string(),
        rules_dir_readable: rule_count.is_some(),
        rule_count,
        config: state.config.summary(),
    })
}
