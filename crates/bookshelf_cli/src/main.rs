//! CLI front end for the book catalog.
//!
//! # Responsibility
//! - Parse argv into a catalog [`Command`] and render the outcome.
//! - Keep all catalog semantics inside `bookshelf_core`.

use bookshelf_core::{
    core_version, default_log_level, dispatch, init_logging, CatalogService, Command,
    CommandOutput, Entry, JsonCatalogStore,
};
use std::process::ExitCode;

const CATALOG_FILE: &str = "library.json";

const USAGE: &str = "usage: bookshelf <command>

commands:
  list                  show the whole catalog
  add <title> <author>  append an entry
  remove <title>        remove all entries with this title (ignores case)
  search <query>        find entries whose title contains the query";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_command(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            eprintln!("\nbookshelf_core {}", core_version());
            return ExitCode::FAILURE;
        }
    };

    // Logging failure must not block catalog use; the error is still shown.
    if let Some(log_dir) = default_log_dir() {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: {message}");
        }
    }

    let service = CatalogService::new(JsonCatalogStore::new(CATALOG_FILE));
    match dispatch(&service, command) {
        Ok(output) => {
            render(output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_command(args: &[String]) -> Result<Command, String> {
    let (name, rest) = match args.split_first() {
        Some((name, rest)) => (name.as_str(), rest),
        None => return Err("missing command".to_string()),
    };

    match (name, rest) {
        ("list", []) => Ok(Command::List),
        ("add", [title, author]) => Ok(Command::Add {
            title: title.clone(),
            author: author.clone(),
        }),
        ("add", _) => Err("add expects exactly a title and an author".to_string()),
        ("remove", [title]) => Ok(Command::Remove {
            title: title.clone(),
        }),
        ("remove", _) => Err("remove expects exactly a title".to_string()),
        ("search", [query]) => Ok(Command::Search {
            query: query.clone(),
        }),
        ("search", _) => Err("search expects exactly a query".to_string()),
        (other, _) => Err(format!("unknown command `{other}`")),
    }
}

fn render(output: CommandOutput) {
    match output {
        CommandOutput::Entries(entries) => render_entries(&entries),
        CommandOutput::Added { title, author } => {
            println!("'{title}' by {author} added!");
        }
        CommandOutput::Removed { title, count } => {
            if count == 0 {
                println!("No books titled '{title}' found.");
            } else {
                println!("'{title}' removed! ({count} matching)");
            }
        }
    }
}

fn render_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No books found!");
        return;
    }
    for entry in entries {
        println!("{} by {}", entry.title, entry.author);
    }
}

fn default_log_dir() -> Option<String> {
    let dir = std::env::current_dir().ok()?.join("logs");
    Some(dir.to_str()?.to_string())
}
