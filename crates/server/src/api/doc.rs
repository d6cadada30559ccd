//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers into a single OpenAPI
//! document, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "rulepad API",
        version = "0.1.0",
        description = "Named rule documents stored as YAML files, served alongside a static front-end.",
    ),
    tags(
        (name = "Health", description = "Server liveness and rules directory status"),
        (name = "Rules", description = "List, create, read and update rule documents"),
    ),
    paths(
        crate::api::health::health,
        crate::rules::list_rules,
        crate::rules::get_rule,
        crate::rules::create_rule,
        crate::rules::update_rule,
    ),
    components(schemas(
        crate::api::health::HealthResponse,
    ))
)]
pub struct ApiDoc;
