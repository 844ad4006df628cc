//! Application error types for core storage and domain logic.
use thiserror::Error;

/// Top-level application error type.
///
/// Nothing in this crate is fatal: callers branch on the variant and degrade
/// to a smaller but still-consistent state (empty collection, local fallback,
/// blocked action).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    #[error("Storage error: {0}")]
    StorageMessage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),
}
