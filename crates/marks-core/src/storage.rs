//! On-disk persistence for the bookmark list.
//!
//! The whole list lives under one path as a pretty-printed JSON array and
//! is rewritten wholesale on every mutation. There is no schema version and
//! no migration: a missing or malformed blob simply loads as an empty list.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::bookmark::Bookmark;

/// File name of the blob under the data directory.
pub const BLOB_FILE_NAME: &str = "bookmarks.json";

/// Failure while writing the blob. Reads never fail; see [`BlobStore::load`].
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("encode bookmarks: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

/// Handle on the persisted bookmark blob.
#[derive(Debug, Clone)]
pub struct BlobStore {
    path: PathBuf,
}

impl BlobStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the resolved default location (see [`resolve_data_path`]).
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(resolve_data_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted list.
    ///
    /// A missing file and a malformed blob both yield an empty list; the
    /// malformed case is logged at `warn` and otherwise swallowed, never
    /// surfaced to the user.
    #[must_use]
    pub fn load(&self) -> Vec<Bookmark> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    log::warn!("read {}: {err}", self.path.display());
                }
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!(
                    "discarding malformed bookmark blob {}: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Replace the persisted list with `entries`.
    ///
    /// The blob is written to a temporary sibling and renamed into place so
    /// a partial write is never visible at the real path.
    pub fn save(&self, entries: &[Bookmark]) -> Result<(), StorageError> {
        let data = serde_json::to_string_pretty(entries)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data.as_bytes()).map_err(|source| StorageError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::debug!(
            "saved {} bookmark(s) to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Resolve the blob location: `MARKS_DATA_PATH` wins, then the user data
/// directory, then the working directory as a last resort.
#[must_use]
pub fn resolve_data_path() -> PathBuf {
    if let Some(path) = std::env::var_os("MARKS_DATA_PATH") {
        return PathBuf::from(path);
    }
    if let Some(home) = std::env::var_os("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".local");
        path.push("share");
        path.push("marks");
        path.push(BLOB_FILE_NAME);
        return path;
    }
    PathBuf::from(BLOB_FILE_NAME)
}
