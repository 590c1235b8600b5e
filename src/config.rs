// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ClientError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_PREVIEW_CHARS: usize = 400;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    pub top_k: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub preview_chars: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)
            .and_then(|b| b.set_default("query.top_k", DEFAULT_TOP_K as u64))
            .and_then(|b| b.set_default("display.preview_chars", DEFAULT_PREVIEW_CHARS as u64))
            .map_err(|e| ClientError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RAG_PLAYGROUND")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            api: ApiConfig::default(),
            query: QueryConfig::default(),
            display: DisplayConfig::default(),
        }
    }

    /// Applies a command-line base URL, which wins over file and environment.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Result<Self> {
        if let Some(url) = base_url {
            self.api.base_url = url;
            self.validate()?;
        }
        Ok(self)
    }

    pub fn with_top_k(mut self, top_k: Option<usize>) -> Result<Self> {
        if let Some(top_k) = top_k {
            self.query.top_k = top_k;
            self.validate()?;
        }
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.api.base_url)
            .map_err(|e| ClientError::Config(e.to_string()))?;

        if self.query.top_k == 0 {
            return Err(ClientError::Config(
                "top_k must be greater than 0".to_string(),
            ));
        }

        if self.display.preview_chars == 0 {
            return Err(ClientError::Config(
                "preview_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
