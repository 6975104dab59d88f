//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for presentation callers.
//! - Enforce caller-side validation, then delegate to the store.
//!
//! # Invariants
//! - `add_entry` never reaches the store with a blank title or author.
//! - Service APIs never reorder or filter store results beyond the
//!   documented operation semantics.

use crate::model::entry::{Entry, EntryValidationError};
use crate::repo::catalog_repo::{CatalogStore, StoreError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level error: either rejected input or a store failure.
#[derive(Debug)]
pub enum ServiceError {
    Validation(EntryValidationError),
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for ServiceError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service wrapper around a catalog store.
pub struct CatalogService<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> CatalogService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the full catalog in insertion order.
    pub fn list_entries(&self) -> ServiceResult<Vec<Entry>> {
        Ok(self.store.load()?)
    }

    /// Validates and appends a new entry.
    ///
    /// # Contract
    /// - Both fields must carry non-blank text.
    /// - The entry lands at the end of the catalog; duplicates are allowed.
    pub fn add_entry(&self, title: &str, author: &str) -> ServiceResult<()> {
        if let Err(err) = Entry::new(title, author).validate() {
            warn!("event=entry_rejected module=service status=error reason={err}");
            return Err(err.into());
        }
        Ok(self.store.add(title, author)?)
    }

    /// Removes every entry matching `title` case-insensitively.
    ///
    /// Returns how many entries were dropped; zero is not an error.
    pub fn remove_entry(&self, title: &str) -> ServiceResult<usize> {
        Ok(self.store.remove(title)?)
    }

    /// Returns entries whose title contains `query` case-insensitively.
    pub fn search_entries(&self, query: &str) -> ServiceResult<Vec<Entry>> {
        Ok(self.store.search(query)?)
    }
}
