//! The external default-card manifest.

use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;
use crate::models::card::Category;

/// One manifest entry: metadata for a bootstrapped default card.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestCard {
    pub id: String,
    pub category: Category,
    pub image_filename: String,
    pub text_en: String,
    pub text_vi: String,
}

/// The `default-cards.json` resource fetched at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultCardManifest {
    #[serde(default)]
    pub cards: Vec<ManifestCard>,
}

impl DefaultCardManifest {
    /// Read and parse a manifest file.
    ///
    /// # Errors
    /// Returns `ResourceUnavailable` when the file cannot be read and
    /// `Serialization` when it does not parse.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let bytes = std::fs::read(path).map_err(|err| {
            AppError::ResourceUnavailable(format!("manifest {}: {err}", path.display()))
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Load a manifest, treating any failure as "no default cards yet".
    ///
    /// A missing or malformed manifest is a soft failure: bootstrap simply
    /// has nothing to merge and will retry on a later call.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(manifest) => manifest,
            Err(err) => {
                tracing::warn!("default-card manifest unavailable, skipping: {err}");
                Self::default()
            }
        }
    }
}
