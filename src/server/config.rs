use std::time::Duration;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_STORAGE_REGION: &str = "us-east-1";
const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub storage: StorageConfig,
}

/// Object storage settings for photo uploads.
pub struct StorageConfig {
    /// Public base URL photos are served from, without a trailing slash.
    pub base_url: String,
    pub bucket: String,
    pub region: String,
    /// Custom S3-compatible endpoint; the AWS default is used when unset.
    pub endpoint: Option<String>,
    /// Explicit credentials. When unset the standard AWS env/profile chain is used.
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            storage: StorageConfig::from_env()?,
        })
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = required("STORAGE_BASE_URL")?;
        Url::parse(&base_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "STORAGE_BASE_URL".to_string(),
            reason: e.to_string(),
        })?;

        let timeout = match optional("STORAGE_TIMEOUT_SECS") {
            Some(value) => value.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "STORAGE_TIMEOUT_SECS".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_STORAGE_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: required("STORAGE_BUCKET")?,
            region: optional("STORAGE_REGION")
                .unwrap_or_else(|| DEFAULT_STORAGE_REGION.to_string()),
            endpoint: optional("STORAGE_ENDPOINT"),
            access_key_id: optional("STORAGE_ACCESS_KEY_ID"),
            secret_access_key: optional("STORAGE_SECRET_ACCESS_KEY"),
            timeout: Duration::from_secs(timeout),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
