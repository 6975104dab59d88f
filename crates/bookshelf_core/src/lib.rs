//! Core domain logic for the personal book catalog.
//! This crate is the single source of truth for catalog semantics.
//!
//! The catalog is an ordered sequence of `{title, author}` entries kept in
//! one JSON file. Every operation is a full load-mutate-save round trip:
//! nothing is cached between calls, and the whole file is rewritten on
//! every mutation. Presentation code lives outside this crate and talks to
//! the store through [`CatalogService`] and [`dispatch`].

pub mod command;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use command::{dispatch, Command, CommandOutput};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{Entry, EntryValidationError};
pub use repo::catalog_repo::{CatalogStore, JsonCatalogStore, StoreError, StoreResult};
pub use service::catalog_service::{CatalogService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
