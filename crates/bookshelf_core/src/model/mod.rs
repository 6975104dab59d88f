//! Domain model for the personal book catalog.
//!
//! # Responsibility
//! - Define the canonical entry record used by core business logic.
//! - Keep title-matching semantics in one place.
//!
//! # Invariants
//! - Titles are compared case-insensitively everywhere in core.
//! - No uniqueness constraint: duplicate titles may coexist.

pub mod entry;
