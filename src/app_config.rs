use config::Config;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    platform: Platform,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    log_level: String,
}

impl Core {
    // Unknown levels fall back to INFO
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

#[derive(Debug, Deserialize)]
pub struct Platform {
    config_file: String,
}

impl Platform {
    pub fn config_file(&self) -> &Path {
        Path::new(&self.config_file)
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    log_level: "info".to_string(),
                },
                platform: Platform {
                    config_file: "platform.json".to_string(),
                },
            },
        }
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.core.log_level = level.to_string();
        self
    }

    pub fn config_file(mut self, path: &str) -> Self {
        self.config.platform.config_file = path.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
