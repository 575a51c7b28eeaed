//! Handles settings for the application.
//!
//! Settings are read from an optional TOML file (`config/mahr.toml` unless
//! `--config` says otherwise) and from `MAHR__*` environment variables, e.g.
//! `MAHR__ADVISOR__API_KEY`. When no key is configured, `GEMINI_API_KEY` or
//! `API_KEY` is used if set.
use advisor::AdvisorSettings;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/mahr";
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub advisor: AdvisorSettings,
}

impl Settings {
    pub fn new(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };
        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("MAHR").separator("__"))
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        settings.fill_api_key(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Take the advisor key from the well-known variables if none is configured.
    fn fill_api_key(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.advisor.api_key().is_some() {
            return;
        }
        self.advisor.api_key = API_KEY_VARS
            .iter()
            .find_map(|name| lookup(name).filter(|key| !key.trim().is_empty()));
    }
}
