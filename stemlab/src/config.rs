//! Client configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::{AppError, Result};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend root, without the `/api` prefix
    pub backend_url: String,
    /// Connect + response timeout for every call
    pub timeout: Duration,
    /// Where local durable storage lives
    pub data_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            data_dir: default_data_dir(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// - `STEMLAB_BACKEND_URL` (default `http://localhost:8001`)
    /// - `STEMLAB_TIMEOUT_SECS` (default 10)
    /// - `STEMLAB_DATA_DIR` (default: platform data dir + `stemlab`)
    pub fn from_env() -> Result<Self> {
        let backend_url = env::var("STEMLAB_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let timeout_secs = env::var("STEMLAB_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| AppError::Config("STEMLAB_TIMEOUT_SECS must be a valid number".to_string()))?;

        let data_dir = env::var("STEMLAB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let config = Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
            data_dir,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "backend URL must start with http:// or https://, got {}",
                self.backend_url
            )));
        }

        let secs = self.timeout.as_secs();
        if secs == 0 || secs > 300 {
            return Err(AppError::Config(
                "request timeout must be between 1 and 300 seconds".to_string(),
            ));
        }

        Ok(())
    }

    pub fn storage_file(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stemlab")
}
