//! Catalog entry domain model.
//!
//! # Responsibility
//! - Define the persisted record shape (`title` + `author`).
//! - Provide the case-insensitive title matching used by remove/search.
//!
//! # Invariants
//! - `title` is the unique-ish removal/search key, but duplicates are legal.
//! - Matching lowercases both sides; no locale-aware collation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for user-supplied entry fields.
///
/// Validation is a caller-side concern: the store persists whatever it is
/// given, and [`crate::service::catalog_service::CatalogService`] runs this
/// check before any file I/O happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Author is empty or whitespace-only.
    EmptyAuthor,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "entry title must not be empty"),
            Self::EmptyAuthor => write!(f, "entry author must not be empty"),
        }
    }
}

impl Error for EntryValidationError {}

/// One catalog record.
///
/// The on-disk shape is exactly this struct: a JSON object with string
/// fields `title` and `author`, stored inside a top-level JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Book title, used as the removal/search key (case-insensitive).
    pub title: String,
    /// Author name, display-only.
    pub author: String,
}

impl Entry {
    /// Creates an entry without validating field contents.
    ///
    /// Callers that accept user input should run [`Entry::validate`] first;
    /// load paths deliberately accept whatever the file contains.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Checks that both fields carry non-blank text.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.title.trim().is_empty() {
            return Err(EntryValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(EntryValidationError::EmptyAuthor);
        }
        Ok(())
    }

    /// Returns whether this entry's title equals `title`, ignoring case.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Returns whether this entry's title contains `query`, ignoring case.
    ///
    /// The empty query is a substring of every title, so it matches all
    /// entries. That mirrors the search contract: no special case.
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, EntryValidationError};

    #[test]
    fn validate_rejects_blank_fields() {
        let no_title = Entry::new("   ", "Herbert");
        assert_eq!(no_title.validate(), Err(EntryValidationError::EmptyTitle));

        let no_author = Entry::new("Dune", "");
        assert_eq!(no_author.validate(), Err(EntryValidationError::EmptyAuthor));

        let valid = Entry::new("Dune", "Herbert");
        assert_eq!(valid.validate(), Ok(()));
    }

    #[test]
    fn title_matches_ignores_case_only() {
        let entry = Entry::new("Dune", "Herbert");
        assert!(entry.title_matches("dune"));
        assert!(entry.title_matches("DUNE"));
        assert!(!entry.title_matches("dune 2"));
    }

    #[test]
    fn title_contains_is_substring_match() {
        let entry = Entry::new("Brave New World", "Huxley");
        assert!(entry.title_contains("new"));
        assert!(entry.title_contains("WORLD"));
        assert!(entry.title_contains(""));
        assert!(!entry.title_contains("dune"));
    }
}
