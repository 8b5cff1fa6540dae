// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{IndexError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub content: ContentConfig,
    pub index: IndexConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    pub root: PathBuf,
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    pub base_url: String,
    pub output: PathBuf,
    pub title: String,
    pub footer_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub progress: bool,
    pub max_file_size_mb: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("BLOG_INDEX")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| IndexError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| IndexError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            content: ContentConfig {
                root: PathBuf::from("./content"),
                follow_symlinks: false,
            },
            index: IndexConfig {
                base_url: "https://mvaldes.dev".to_string(),
                output: PathBuf::from("index.md"),
                title: "Blog Post Index".to_string(),
                footer_url: "https://about.mvaldes.dev".to_string(),
            },
            pipeline: PipelineConfig {
                progress: true,
                max_file_size_mb: 10,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.index.base_url)
            .map_err(|e| IndexError::Config(format!("base_url: {}", e)))?;

        if self.index.title.trim().is_empty() {
            return Err(IndexError::Config("index title must not be empty".to_string()));
        }

        if self.pipeline.max_file_size_mb == 0 {
            return Err(IndexError::Config(
                "max_file_size_mb must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| IndexError::Config(e.to_string()))
    }
}
