//! Shelf configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHELF_DATA_DIR` - Directory for stored favorites (default: the platform
//!   data directory for `sneaker-shelf`, or `./.shelf` if none exists)
//! - `SHELF_CATALOG_PATH` - JSON dataset to use instead of the bundled one
//! - `SHELF_VIEWPORT_WIDTH` - Viewport width used for grid layout (default: 360)

use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

const DEFAULT_VIEWPORT_WIDTH: &str = "360";
const FALLBACK_DATA_DIR: &str = ".shelf";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shelf configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfConfig {
    /// Directory the key-value store writes to
    pub data_dir: PathBuf,
    /// Dataset overriding the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Viewport width in layout units
    pub viewport_width: f64,
}

impl ShelfConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = get("SHELF_DATA_DIR").map_or_else(default_data_dir, PathBuf::from);
        let catalog_path = get("SHELF_CATALOG_PATH").map(PathBuf::from);
        let viewport_width = parse_width(
            "SHELF_VIEWPORT_WIDTH",
            &get("SHELF_VIEWPORT_WIDTH").unwrap_or_else(|| DEFAULT_VIEWPORT_WIDTH.to_string()),
        )?;

        Ok(Self {
            data_dir,
            catalog_path,
            viewport_width,
        })
    }
}

fn parse_width(name: &str, raw: &str) -> Result<f64, ConfigError> {
    let width = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))?;
    if !width.is_finite() || width < 0.0 {
        return Err(ConfigError::InvalidEnvVar(
            name.to_string(),
            format!("must be a non-negative number, got {raw}"),
        ));
    }
    Ok(width)
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "sneaker-shelf").map_or_else(
        || PathBuf::from(FALLBACK_DATA_DIR),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}
