use std::path::PathBuf;

use crate::{Result, SeedError};

pub const DEFAULT_DATABASE: &str = "test";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_BATCH_SIZE: usize = 100;
pub const DEFAULT_DATA_DIR: &str = "data";

pub const PRODUCTS_FILE: &str = "products.jsonl";
pub const ABOUT_FILE: &str = "version_coffee_about_us.txt";

/// Everything the seeder needs, resolved up front so that a missing
/// variable fails before any connection is attempted.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub embedding_model: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub embedding_batch_size: usize,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(SeedError::MissingVar(key))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let mongodb_uri = required("MONGODB_URI")?;
        let embedding_model = required("EMBEDDING_MODEL")?;
        let openai_api_key = required("OPENAI_API_KEY")?;

        let batch_size = optional("EMBEDDING_BATCH_SIZE", &DEFAULT_BATCH_SIZE.to_string());
        let embedding_batch_size = match batch_size.parse::<usize>() {
            Ok(0) => {
                return Err(SeedError::InvalidVar {
                    name: "EMBEDDING_BATCH_SIZE",
                    reason: "must be greater than zero".to_string(),
                })
            }
            Ok(size) => size,
            Err(err) => {
                return Err(SeedError::InvalidVar {
                    name: "EMBEDDING_BATCH_SIZE",
                    reason: err.to_string(),
                })
            }
        };

        Ok(Config {
            mongodb_uri,
            mongodb_database: optional("MONGODB_DATABASE", DEFAULT_DATABASE),
            embedding_model,
            openai_api_key,
            openai_base_url: optional("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            embedding_batch_size,
            data_dir: PathBuf::from(optional("SEED_DATA_DIR", DEFAULT_DATA_DIR)),
        })
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(PRODUCTS_FILE)
    }

    pub fn about_path(&self) -> PathBuf {
        self.data_dir.join(ABOUT_FILE)
    }
}
