//! Storage layer abstractions and the JSON-file implementation.
//!
//! # Responsibility
//! - Define the catalog store contract used by the service layer.
//! - Isolate file format and I/O details from business orchestration.
//!
//! # Invariants
//! - Every operation is a full load-mutate-save round trip; the store
//!   holds no catalog state between calls.
//! - A missing file reads as an empty catalog; a malformed file is a
//!   surfaced error, never silently replaced.

pub mod catalog_repo;
