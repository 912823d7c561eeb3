//! Unified error handling.
//!
//! Provides a top-level `AppError` that the binary reports before exiting.
//! Layer-specific errors live with their layer and convert via `#[from]`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::{CatalogError, StoreError};

/// Application-level error type for the shop.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// User store operation failed.
    #[error("User store error: {0}")]
    Store(#[from] StoreError),

    /// Product catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
