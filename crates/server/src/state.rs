use rulepad_core::Config;
use rulepad_rules::RuleStore;

/// Process-wide state, built once at startup and never mutated.
pub struct AppState {
    pub config: Config,
    pub store: RuleStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = RuleStore::new(config.storage.rules_dir.clone());
        Self { config, store }
    }
}
