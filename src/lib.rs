//! Core domain library for picboard (storage, crop engine, collaborators).
//!
//! The host UI layer owns rendering and event wiring; it consumes the
//! [`BoardStore`] query/mutation operations and the [`crop::CropSession`]
//! pan/zoom/rasterize operations as its only coupling to this crate.

/// Image-resolution collaborators for default-card assets.
pub mod assets;
/// Configuration loading and defaults.
pub mod config;
/// Crop engine: pan/zoom state and square rasterization.
pub mod crop;
/// Database access layer.
pub mod db;
/// Application error types (storage/domain).
pub mod error;
/// Display languages.
pub mod lang;
/// Data models for persistence and the bootstrap manifest.
pub mod models;
/// Card and sentence-preset store.
pub mod store;
/// Translation collaborator and local fallback.
pub mod translate;

pub use config::Config;
pub use db::Database;
pub use error::AppError;
pub use lang::Language;
pub use store::BoardStore;
