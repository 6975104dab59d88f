//! Command dispatch for catalog actions.
//!
//! # Responsibility
//! - Map one selected action onto one store operation via the service.
//! - Return typed outcomes so presentation code only renders.
//!
//! # Invariants
//! - Dispatch never prints or formats; rendering stays outside core.
//! - Every command resolves to exactly one service call.

use crate::model::entry::Entry;
use crate::repo::catalog_repo::CatalogStore;
use crate::service::catalog_service::{CatalogService, ServiceResult};

/// One user-selected catalog action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the whole catalog.
    List,
    /// Append a new entry.
    Add { title: String, author: String },
    /// Remove all case-insensitive title matches.
    Remove { title: String },
    /// Case-insensitive substring search over titles.
    Search { query: String },
}

/// Typed result of a dispatched command, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Entries to display, in catalog order (list and search).
    Entries(Vec<Entry>),
    /// Acknowledgement that an entry was appended.
    Added { title: String, author: String },
    /// Acknowledgement of a removal, with the number of dropped entries.
    Removed { title: String, count: usize },
}

/// Routes `command` to the matching service operation.
pub fn dispatch<S: CatalogStore>(
    service: &CatalogService<S>,
    command: Command,
) -> ServiceResult<CommandOutput> {
    match command {
        Command::List => Ok(CommandOutput::Entries(service.list_entries()?)),
        Command::Add { title, author } => {
            service.add_entry(&title, &author)?;
            Ok(CommandOutput::Added { title, author })
        }
        Command::Remove { title } => {
            let count = service.remove_entry(&title)?;
            Ok(CommandOutput::Removed { title, count })
        }
        Command::Search { query } => Ok(CommandOutput::Entries(service.search_entries(&query)?)),
    }
}
