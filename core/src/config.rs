use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub graph: GraphConfig,
    pub completion: CompletionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("TALENTGRAPH").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// Load from an explicit directory instead of the process working
    /// directory. Used by tests and embedding callers.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(dir.join("default")))
            .add_source(Environment::with_prefix("TALENTGRAPH").separator("__"));

        builder.build()?.try_deserialize()
    }
}
