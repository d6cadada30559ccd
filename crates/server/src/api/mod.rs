//! Service-level endpoints: health and OpenAPI documentation.

pub mod doc;
pub mod health;

pub use health::health;
