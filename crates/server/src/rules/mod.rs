//! Rule document API endpoints.
//!
//! REST endpoints over [`rulepad_rules::RuleStore`]: list, create, read and
//! update named rule files. Content is passed through as opaque bytes.

mod handlers;


use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tracing::warn;

use rulepad_rules::RuleError;

use crate::state::AppState;

pub use handlers::*;

/// Base path of the rules API.
pub const API_BASE: &str = "/api/rules";

/// Build the rules sub-router.
pub fn rules_router(max_body_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        .route(API_BASE, get(list_rules))
        .route(
            &format!("{API_BASE}/{{name}}"),
            get(get_rule).post(create_rule).put(update_rule),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

/// Map a store error to a plain-text HTTP error.
///
/// `failure` is the message used for server-side failures.
pub(crate) fn error_response(e: RuleError, failure: &str) -> (StatusCode, String) {
    match e {
        RuleError::InvalidName { .. } => (StatusCode::BAD_REQUEST, e.to_string()),
        RuleError::NotFound(_) => (StatusCode::NOT_FOUND, "Rule not found".to_string()),
        RuleError::ReadDir { .. }
        | RuleError::Read { .. }
        | RuleError::Write { .. }
        | RuleError::Io(_) => {
            warn!(error = %e, "{}", failure);
            (StatusCode::INTERNAL_SERVER_ERROR, failure.to_string())
        }
    }
}
