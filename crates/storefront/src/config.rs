//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOPFRONT_DATA_DIR` - Directory for durable storage (default: `.shopfront`)
//! - `SHOPFRONT_CATALOG` - Path to a JSON product catalog (default: bundled catalog)
//! - `SHOPFRONT_VIEWPORT_WIDTH` - Viewport width in pixels for the carousel (default: 1280)
//! - `SHOPFRONT_BUY_NOW_REQUIRES_AUTH` - `true` to gate "Buy Now" on login (default: false)
//! - `SHOPFRONT_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter (see [`crate::telemetry`])

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};

const DEFAULT_DATA_DIR: &str = ".shopfront";
const DEFAULT_VIEWPORT_WIDTH: &str = "1280";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Shop behaviour switches, independent of where data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopSettings {
    /// Viewport width used to size the category carousel.
    pub viewport_width: u32,
    /// Whether "Buy Now" requires the login flag like "Add to Cart" does.
    pub buy_now_requires_auth: bool,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            buy_now_requires_auth: false,
        }
    }
}

/// Shop application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Directory holding durable storage files
    pub data_dir: PathBuf,
    /// Catalog file; `None` uses the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Behaviour switches
    pub settings: ShopSettings,
    /// Log output format
    pub log_format: LogFormat,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable has an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let data_dir = PathBuf::from(get_or_default("SHOPFRONT_DATA_DIR", DEFAULT_DATA_DIR));
        let catalog_path = lookup("SHOPFRONT_CATALOG")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let viewport_width = get_or_default("SHOPFRONT_VIEWPORT_WIDTH", DEFAULT_VIEWPORT_WIDTH)
            .trim()
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPFRONT_VIEWPORT_WIDTH".to_string(), e.to_string())
            })?;
        let buy_now_requires_auth = parse_bool(
            "SHOPFRONT_BUY_NOW_REQUIRES_AUTH",
            &get_or_default("SHOPFRONT_BUY_NOW_REQUIRES_AUTH", "false"),
        )?;
        let log_format = parse_log_format(&get_or_default("SHOPFRONT_LOG_FORMAT", "pretty"))?;

        Ok(Self {
            data_dir,
            catalog_path,
            settings: ShopSettings {
                viewport_width,
                buy_now_requires_auth,
            },
            log_format,
        })
    }

    /// Load the configured catalog, falling back to the bundled one.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        self.catalog_path
            .as_deref()
            .map_or_else(Catalog::bundled, Catalog::from_path)
    }

    /// Directory holding durable storage files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a boolean flag (`true`/`false`/`1`/`0`/`yes`/`no`).
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected true or false, got {other:?}"),
        )),
    }
}

/// Parse the log format name.
fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidEnvVar(
            "SHOPFRONT_LOG_FORMAT".to_string(),
            format!("expected pretty or json, got {other:?}"),
        )),
    }
}
