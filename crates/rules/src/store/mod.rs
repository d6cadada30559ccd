//! Flat-directory rule store.
//!
//! One file per rule at `<rules_dir>/<name>.yaml`. The directory is the only
//! source of truth: every call reads or writes it directly and nothing is
//! cached between calls.

mod core;
mod error;

#[cfg(test)]
mod tests;

pub use self::core::{RuleStore, RULE_EXTENSION};
pub use self::error::{Result, RuleError};
