use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Key lookup used to build a [`Config`]. The process environment in
/// production, a plain map in tests.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Read a profiled key: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_opt(lookup: Lookup<'_>, profile: &str, key: &str) -> Option<String> {
    let get = |k: &str| lookup(k).filter(|s| !s.is_empty());
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = get(&prefixed) {
            return Some(v);
        }
    }
    get(key)
}

fn profiled_or(lookup: Lookup<'_>, profile: &str, key: &str, default: &str) -> String {
    profiled_opt(lookup, profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_u16(lookup: Lookup<'_>, profile: &str, key: &str, default: u16) -> u16 {
    profiled_opt(lookup, profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_usize(lookup: Lookup<'_>, profile: &str, key: &str, default: usize) -> usize {
    profiled_opt(lookup, profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `RULEPAD_PROFILE`. When set (e.g. `PROD`), every
    /// key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_opt("RULEPAD_PROFILE").unwrap_or_default();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        Self::from_lookup(profile, &env_opt)
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(profile: &str, lookup: Lookup<'_>) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            server: ServerConfig::from_lookup(lookup, p),
            storage: StorageConfig::from_lookup(lookup, p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  server:   host={}, port={}, cors_origin={}",
            self.server.host, self.server.port, self.server.cors_origin
        );
        tracing::info!("  rules:    dir={}", self.storage.rules_dir.display());
        tracing::info!("  static:   dir={}", self.storage.static_dir.display());
        tracing::info!("  body:     max_bytes={}", self.storage.max_body_bytes);
    }

    /// Return a JSON view for diagnostics endpoints.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "server": { "host": self.server.host, "port": self.server.port },
            "storage": {
                "rules_dir": self.storage.rules_dir,
                "static_dir": self.storage.static_dir,
                "max_body_bytes": self.storage.max_body_bytes,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup("", &|_: &str| None)
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_lookup(lookup: Lookup<'_>, p: &str) -> Self {
        Self {
            host: profiled_or(lookup, p, "HOST", "0.0.0.0"),
            port: profiled_u16(lookup, p, "PORT", 8080),
            cors_origin: profiled_or(lookup, p, "CORS_ORIGIN", "*"),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Storage ───────────────────────────────────────────────────

/// 2 MiB; rule documents are small text files.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Flat directory holding one `<name>.yaml` file per rule.
    pub rules_dir: PathBuf,
    /// Front-end assets served at `/`.
    pub static_dir: PathBuf,
    /// Upper bound on a rule upload.
    pub max_body_bytes: usize,
}

impl StorageConfig {
    fn from_lookup(lookup: Lookup<'_>, p: &str) -> Self {
        Self {
            rules_dir: PathBuf::from(profiled_or(lookup, p, "RULES_DIR", "./rules")),
            static_dir: PathBuf::from(profiled_or(lookup, p, "STATIC_DIR", "./static")),
            max_body_bytes: profiled_usize(lookup, p, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }
}
