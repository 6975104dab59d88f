//! Catalog store contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide load/save/add/remove/search over one persisted catalog file.
//! - Keep serialization details inside the persistence boundary.
//!
//! # Invariants
//! - Insertion order is preserved on disk and in every returned sequence.
//! - `remove` drops every case-insensitive title match, not just the first.
//! - The store performs no field validation; that is a caller concern.

use crate::model::entry::Entry;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for catalog file operations.
///
/// A missing file on load is not an error; it reads as an empty catalog.
#[derive(Debug)]
pub enum StoreError {
    /// File I/O failure other than missing-on-load.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file exists but does not parse as a catalog.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "catalog file I/O failed at `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "malformed catalog file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

/// Store interface for catalog operations.
///
/// Each mutation is a whole-file round trip: load, change the in-memory
/// sequence, write everything back. There is no caching across calls.
pub trait CatalogStore {
    /// Reads the full catalog. Missing file means empty catalog.
    fn load(&self) -> StoreResult<Vec<Entry>>;
    /// Overwrites the persisted catalog with `entries`, order preserved.
    fn save(&self, entries: &[Entry]) -> StoreResult<()>;
    /// Appends one entry at the end of the catalog.
    fn add(&self, title: &str, author: &str) -> StoreResult<()>;
    /// Removes every entry whose title equals `title` case-insensitively.
    /// Returns how many entries were dropped.
    fn remove(&self, title: &str) -> StoreResult<usize>;
    /// Returns entries whose title contains `query` case-insensitively,
    /// in catalog order. The empty query matches everything.
    fn search(&self, query: &str) -> StoreResult<Vec<Entry>>;
}

/// Catalog store backed by one pretty-printed JSON file.
///
/// The storage location is explicit constructor configuration; core never
/// consults globals or the environment for it.
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    /// Creates a store over the given file path. The file does not have to
    /// exist yet; the first save creates it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CatalogStore for JsonCatalogStore {
    fn load(&self) -> StoreResult<Vec<Entry>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=catalog_load module=repo status=ok path={} entries=0 missing_file=true",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let entries: Vec<Entry> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "event=catalog_load module=repo status=ok path={} entries={}",
            self.path.display(),
            entries.len()
        );
        Ok(entries)
    }

    fn save(&self, entries: &[Entry]) -> StoreResult<()> {
        // Pretty-printed for hand inspection; the whole file is rewritten
        // on every mutation.
        let serialized = serde_json::to_string_pretty(entries).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        std::fs::write(&self.path, serialized).map_err(|err| self.io_error(err))?;

        debug!(
            "event=catalog_save module=repo status=ok path={} entries={}",
            self.path.display(),
            entries.len()
        );
        Ok(())
    }

    fn add(&self, title: &str, author: &str) -> StoreResult<()> {
        let mut entries = self.load()?;
        entries.push(Entry::new(title, author));
        self.save(&entries)?;

        info!(
            "event=catalog_add module=repo status=ok title={title} entries={}",
            entries.len()
        );
        Ok(())
    }

    fn remove(&self, title: &str) -> StoreResult<usize> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|entry| !entry.title_matches(title));
        let removed = before - entries.len();
        self.save(&entries)?;

        info!(
            "event=catalog_remove module=repo status=ok title={title} removed={removed} entries={}",
            entries.len()
        );
        Ok(removed)
    }

    fn search(&self, query: &str) -> StoreResult<Vec<Entry>> {
        let entries = self.load()?;
        let hits: Vec<Entry> = entries
            .into_iter()
            .filter(|entry| entry.title_contains(query))
            .collect();

        debug!(
            "event=catalog_search module=repo status=ok hits={}",
            hits.len()
        );
        Ok(hits)
    }
}
