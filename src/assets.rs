//! Image-resolution collaborators for default-card assets.
//!
//! Default cards reference images by filename; where those bytes actually
//! live depends on the deployment. Resolution tries an ordered list of
//! candidate locations and the first hit wins; total failure is soft (the
//! bootstrap skips the entry and retries later).

use std::path::PathBuf;

use crate::error::AppError;

/// Resolves a default-card image filename to a loadable location (a path or
/// a URL, depending on the implementation).
pub trait ResolveImage {
    /// # Errors
    /// `ResourceUnavailable` when no candidate holds the file.
    fn resolve(&self, filename: &str) -> Result<String, AppError>;
}

/// Resolver over local asset directories, tried in order.
pub struct DirImageResolver {
    candidates: Vec<PathBuf>,
}

impl DirImageResolver {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Resolver over a single asset directory.
    pub fn single(dir: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![dir.into()],
        }
    }
}

impl ResolveImage for DirImageResolver {
    fn resolve(&self, filename: &str) -> Result<String, AppError> {
        for dir in &self.candidates {
            let path = dir.join(filename);
            if path.is_file() {
                return Ok(path.to_string_lossy().into_owned());
            }
        }
        Err(AppError::ResourceUnavailable(format!(
            "image {filename} not found in any asset directory"
        )))
    }
}

/// Resolver probing a static asset host, base URLs tried in order; the
/// first responding-OK candidate wins.
pub struct HttpImageResolver {
    bases: Vec<String>,
    client: reqwest::blocking::Client,
}

impl HttpImageResolver {
    pub fn new(bases: Vec<String>) -> Self {
        Self {
            bases,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl ResolveImage for HttpImageResolver {
    fn resolve(&self, filename: &str) -> Result<String, AppError> {
        for base in &self.bases {
            let url = format!("{}/{}", base.trim_end_matches('/'), filename);
            match self.client.get(&url).send() {
                Ok(response) if response.status().is_success() => return Ok(url),
                Ok(response) => {
                    tracing::debug!("asset probe {url} returned {}", response.status());
                }
                Err(err) => {
                    tracing::debug!("asset probe {url} failed: {err}");
                }
            }
        }
        Err(AppError::ResourceUnavailable(format!(
            "image {filename} not reachable on any asset host"
        )))
    }
}
