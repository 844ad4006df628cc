//! Database layer: named collection entries over an embedded key-value store.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;

/// Named entry holding the JSON-serialized card collection.
pub const CARDS_KEY: &str = "pecsCards";
/// Named entry holding the JSON-serialized sentence-preset collection.
pub const PRESETS_KEY: &str = "pecsSentencePresets";


/// Handle to the local database.
///
/// Each collection lives under a single named key as a JSON array, matching
/// the original storage schema and preserving insertion order (the key-value
/// store's own iteration order is key order, which is not what category
/// filtering wants). Collections are read-modify-written synchronously.
pub struct Database {
    db: sled::Db,
}

impl Database {
    /// Open the database, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if the store cannot be opened; a held filesystem
    /// lock gets a dedicated message since it usually means a second
    /// process is running.
    pub fn open(path: &str) -> Result<Self, AppError> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let db = match sled::open(path) {
            Ok(db) => db,
            Err(e) if e.to_string().contains("could not acquire lock") => {
                return Err(AppError::StorageMessage(format!(
                    "Database at {path} is locked. Another instance may be running, \
                     or a previous crash left a stale lock. Close the other instance \
                     or point DB_PATH at a different location."
                )));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { db })
    }

    /// Read a collection entry.
    ///
    /// An absent key yields an empty collection. A corrupt value also yields
    /// an empty collection, with a warning; failing to load is never fatal.
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppError> {
        match self.db.get(key)? {
            None => Ok(Vec::new()),
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(items) => Ok(items),
                Err(err) => {
                    tracing::warn!("discarding corrupt collection entry {key}: {err}");
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Serialize and write a collection entry, flushing to disk.
    ///
    /// # Errors
    /// Propagates serialization and storage errors.
    pub fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), AppError> {
        let bytes = serde_json::to_vec(items)?;
        self.db.insert(key, bytes)?;
        self.db.flush()?;
        Ok(())
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<(), AppError> {
        self.db.flush()?;
        Ok(())
    }
}
