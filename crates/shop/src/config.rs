//! Shop configuration.
//!
//! # Resolution order
//!
//! For each backing file, the first of:
//! 1. the CLI flag (`--users` / `--products`),
//! 2. the environment variable,
//! 3. the built-in default under `files/`.
//!
//! # Environment Variables
//!
//! - `CORNER_MARKET_USERS_FILE` - Path to the user store JSON file
//! - `CORNER_MARKET_PRODUCTS_FILE` - Path to the product catalog CSV file

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the user store file.
pub const USERS_FILE_ENV: &str = "CORNER_MARKET_USERS_FILE";

/// Environment variable naming the product catalog file.
pub const PRODUCTS_FILE_ENV: &str = "CORNER_MARKET_PRODUCTS_FILE";

const DEFAULT_USERS_FILE: &str = "files/users.json";
const DEFAULT_PRODUCTS_FILE: &str = "files/products.csv";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but blank.
    #[error("environment variable {0} is set but empty")]
    EmptyEnvVar(&'static str),
}

/// Shop application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Path to the user store JSON file.
    pub users_file: PathBuf,
    /// Path to the product catalog CSV file.
    pub products_file: PathBuf,
}

impl ShopConfig {
    /// Resolve the configuration from CLI overrides, environment, and
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyEnvVar` if an environment variable is
    /// set to an empty string.
    pub fn load(
        users_override: Option<PathBuf>,
        products_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            users_file: resolve(users_override, USERS_FILE_ENV, DEFAULT_USERS_FILE)?,
            products_file: resolve(products_override, PRODUCTS_FILE_ENV, DEFAULT_PRODUCTS_FILE)?,
        })
    }
}

fn resolve(
    cli_override: Option<PathBuf>,
    var: &'static str,
    default: &str,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = cli_override {
        return Ok(path);
    }
    match env::var(var) {
        Ok(value) if value.is_empty() => Err(ConfigError::EmptyEnvVar(var)),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(default)),
    }
}
