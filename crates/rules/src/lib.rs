//! Filesystem-backed store for named rule documents.
//!
//! This crate provides:
//! - [`RuleName`], the validated identity of a rule (no path traversal)
//! - [`RuleStore`], one `<name>.yaml` file per rule, read and written fresh
//!   on every call
//!
//! Rule content is opaque bytes and is never parsed.

pub mod name;
pub mod store;

pub use name::RuleName;
pub use store::{Result, RuleError, RuleStore, RULE_EXTENSION};
