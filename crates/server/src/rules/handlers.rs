//! Axum handler functions for rule list / create / update / get.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::debug;

use rulepad_rules::RuleName;

use crate::state::AppState;

use super::error_response;

type ApiError = (StatusCode, String);

/// Content type of rule documents returned by [`get_rule`].
pub const YAML_CONTENT_TYPE: &str = "application/yaml";

fn parse_name(name: String) -> Result<RuleName, ApiError> {
    RuleName::parse(name).map_err(|e| error_response(e, "Invalid rule name"))
}

fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, ApiError> {
    body.map_err(|e| {
        debug!(error = %e, "request body rejected");
        (StatusCode::BAD_REQUEST, "Failed to read request body".to_string())
    })
}

// ── List / Get ──────────────────────────────────────────────────────

/// List the names of all rules, sorted ascending.
#[utoipa::path(
    get,
    path = "/api/rules",
    tag = "Rules",
    responses(
        (status = 200, description = "Rule names", body = Vec<String>),
        (status = 500, description = "Rules directory unreadable", body = String)
    )
)]
pub(crate) async fn list_rules(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let names = state
        .store
        .list()
        .map_err(|e| error_response(e, "Failed to read rules directory"))?;
    Ok(Json(names))
}

/// Get the raw content of a rule.
#[utoipa::path(
    get,
    path = "/api/rules/{name}",
    tag = "Rules",
    params(
        ("name" = String, Path, description = "Rule name")
    ),
    responses(
        (status = 200, description = "Rule source", content_type = "application/yaml", body = String),
        (status = 400, description = "Invalid rule name", body = String),
        (status = 404, description = "Rule not found", body = String),
        (status = 500, description = "Rule file unreadable", body = String)
    )
)]
pub(crate) async fn get_rule(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let name = parse_name(name)?;
    let content = state
        .store
        .get(&name)
        .map_err(|e| error_response(e, "Failed to read rule"))?;
    Ok(([(header::CONTENT_TYPE, YAML_CONTENT_TYPE)], content))
}

// ── Create / Update ─────────────────────────────────────────────────

/// Create a rule from the raw request body. Replaces an existing rule of the
/// same name.
#[utoipa::path(
    post,
    path = "/api/rules/{name}",
    tag = "Rules",
    params(
        ("name" = String, Path, description = "Rule name")
    ),
    request_body(content = String, content_type = "application/yaml", description = "Rule source, stored verbatim"),
    responses(
        (status = 201, description = "Rule created", body = String),
        (status = 400, description = "Unreadable body or invalid name", body = String),
        (status = 500, description = "Rule file unwritable", body = String)
    )
)]
pub(crate) async fn create_rule(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let body = read_body(body)?;
    let name = parse_name(name)?;
    state
        .store
        .create(&name, &body)
        .map_err(|e| error_response(e, "Failed to save rule"))?;
    Ok((StatusCode::CREATED, "Rule created successfully"))
}

/// Replace the content of an existing rule.
#[utoipa::path(
    put,
    path = "/api/rules/{name}",
    tag = "Rules",
    params(
        ("name" = String, Path, description = "Rule name")
    ),
    request_body(content = String, content_type = "application/yaml", description = "New rule source, stored verbatim"),
    responses(
        (status = 200, description = "Rule updated", body = String),
        (status = 400, description = "Unreadable body or invalid name", body = String),
        (status = 404, description = "Rule not found", body = String),
        (status = 500, description = "Rule file unwritable", body = String)
    )
)]
pub(crate) async fn update_rule(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let body = read_body(body)?;
    let name = parse_name(name)?;
    state
        .store
        .update(&name, &body)
        .map_err(|e| error_response(e, "Failed to update rule"))?;
    Ok((StatusCode::OK, "Rule updated successfully"))
}
