//! CLI argument parsing and config overrides.

use std::path::PathBuf;

use clap::Parser;

use rulepad_core::Config;

/// Rule document server: static front-end plus the `/api/rules` API.
#[derive(Parser, Debug)]
#[command(name = "rulepad-server", version, about)]
pub struct Cli {
    /// Configuration profile; overrides `RULEPAD_PROFILE`.
    #[arg(long)]
    pub profile: Option<String>,

    /// Address to bind.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Directory holding `<name>.yaml` rule files.
    #[arg(long)]
    pub rules_dir: Option<PathBuf>,

    /// Directory of front-end assets served at `/`.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Cli {
    /// Load `.env` and the environment, then apply command-line overrides.
    pub fn load_config(&self) -> Config {
        rulepad_core::config::load_dotenv();
        let mut config = match &self.profile {
            Some(profile) => Config::for_profile(profile),
            None => Config::from_env(),
        };
        self.apply(&mut config);
        config
    }

    fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.rules_dir {
            config.storage.rules_dir = dir.clone();
        }
        if let Some(dir) = &self.static_dir {
            config.storage.static_dir = dir.clone();
        }
    }
}
