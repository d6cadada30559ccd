//! Shared configuration for the rulepad service.

pub mod config;

pub use config::Config;
