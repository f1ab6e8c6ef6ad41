mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;
    config.validate()?;

    Ok(config)
}

impl Config {
    /// Fail-fast startup validation. The process must not begin serving
    /// traffic with a configuration that cannot support the pipeline.
    pub fn validate(&self) -> Result<()> {
        let model_dir = std::path::Path::new(&self.model.dir);
        if !model_dir.is_dir() {
            return Err(Error::config(format!(
                "Model directory does not exist: {}",
                self.model.dir
            )));
        }
        if self.server.database_path.is_empty() {
            return Err(Error::config("Database path must not be empty"));
        }
        Ok(())
    }
}
