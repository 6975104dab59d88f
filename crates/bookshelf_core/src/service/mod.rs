//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.
//!
//! # Invariants
//! - User input validation happens here, before any file I/O.

pub mod catalog_service;
