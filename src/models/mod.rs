//! Data models for persistence and the bootstrap manifest.

/// Card records and categories.
pub mod card;
/// Default-card bootstrap manifest.
pub mod manifest;
/// Saved sentence arrangements.
pub mod preset;


pub use card::{Card, CardImage, Category};
pub use manifest::{DefaultCardManifest, ManifestCard};
pub use preset::SentencePreset;
