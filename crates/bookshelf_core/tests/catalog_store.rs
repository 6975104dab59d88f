use bookshelf_core::{CatalogStore, Entry, JsonCatalogStore, StoreError};
use std::path::PathBuf;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonCatalogStore {
    JsonCatalogStore::new(dir.path().join("library.json"))
}

fn catalog_path(dir: &TempDir) -> PathBuf {
    dir.path().join("library.json")
}

#[test]
fn load_of_missing_file_is_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.load().unwrap(), Vec::<Entry>::new());
}

#[test]
fn save_then_load_round_trips_order_and_content() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let catalog = vec![
        Entry::new("Dune", "Herbert"),
        Entry::new("1984", "Orwell"),
        Entry::new("Brave New World", "Huxley"),
    ];
    store.save(&catalog).unwrap();

    assert_eq!(store.load().unwrap(), catalog);
}

#[test]
fn saved_file_is_a_pretty_printed_json_array() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&[Entry::new("Dune", "Herbert")]).unwrap();

    let raw = std::fs::read_to_string(catalog_path(&dir)).unwrap();
    assert!(raw.contains('\n'), "file should be indented for readability");

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["title"], "Dune");
    assert_eq!(value[0]["author"], "Herbert");
}

#[test]
fn load_of_malformed_file_is_surfaced_as_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    std::fs::write(catalog_path(&dir), "{not json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
}

#[test]
fn load_rejects_json_with_wrong_shape() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    // Valid JSON, but not an array of entries.
    std::fs::write(catalog_path(&dir), r#"{"title": "Dune"}"#).unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
}

#[test]
fn add_to_empty_catalog_creates_single_entry_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.add("Dune", "Herbert").unwrap();

    assert_eq!(store.load().unwrap(), vec![Entry::new("Dune", "Herbert")]);
}

#[test]
fn add_appends_at_the_end() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.add("Dune", "Herbert").unwrap();
    store.add("1984", "Orwell").unwrap();
    store.add("Dune", "Herbert").unwrap();

    let catalog = store.load().unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog[2], Entry::new("Dune", "Herbert"));
}

#[test]
fn remove_drops_every_case_insensitive_match() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .save(&[Entry::new("Dune", "Herbert"), Entry::new("dune", "X")])
        .unwrap();

    let removed = store.remove("DUNE").unwrap();

    assert_eq!(removed, 2);
    assert_eq!(store.load().unwrap(), Vec::<Entry>::new());
}

#[test]
fn remove_keeps_other_entries_in_original_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .save(&[
            Entry::new("Dune", "Herbert"),
            Entry::new("1984", "Orwell"),
            Entry::new("dune", "X"),
            Entry::new("Brave New World", "Huxley"),
        ])
        .unwrap();

    let removed = store.remove("dune").unwrap();

    assert_eq!(removed, 2);
    assert_eq!(
        store.load().unwrap(),
        vec![
            Entry::new("1984", "Orwell"),
            Entry::new("Brave New World", "Huxley"),
        ]
    );
}

#[test]
fn remove_match_is_exact_title_not_substring() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .save(&[Entry::new("Dune", "Herbert"), Entry::new("dune 2", "X")])
        .unwrap();

    let removed = store.remove("dune").unwrap();

    assert_eq!(removed, 1);
    assert_eq!(store.load().unwrap(), vec![Entry::new("dune 2", "X")]);
}

#[test]
fn remove_of_absent_title_is_a_zero_count_not_an_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&[Entry::new("Dune", "Herbert")]).unwrap();

    assert_eq!(store.remove("1984").unwrap(), 0);
    assert_eq!(store.load().unwrap(), vec![Entry::new("Dune", "Herbert")]);
}

#[test]
fn search_returns_case_insensitive_substring_hits_in_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .save(&[
            Entry::new("Dune", "Herbert"),
            Entry::new("1984", "Orwell"),
            Entry::new("Brave New World", "Huxley"),
        ])
        .unwrap();

    // Only `Dune` contains a `d`; `World` does not.
    assert_eq!(
        store.search("d").unwrap(),
        vec![Entry::new("Dune", "Herbert")]
    );

    assert_eq!(
        store.search("E").unwrap(),
        vec![
            Entry::new("Dune", "Herbert"),
            Entry::new("Brave New World", "Huxley"),
        ]
    );
}

#[test]
fn search_with_empty_query_returns_whole_catalog() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let catalog = vec![Entry::new("Dune", "Herbert"), Entry::new("1984", "Orwell")];
    store.save(&catalog).unwrap();

    assert_eq!(store.search("").unwrap(), catalog);
}

#[test]
fn search_with_no_hits_returns_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&[Entry::new("Dune", "Herbert")]).unwrap();

    assert_eq!(store.search("orwell").unwrap(), Vec::<Entry>::new());
}

#[test]
fn mutations_against_malformed_file_fail_instead_of_clobbering_it() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    std::fs::write(catalog_path(&dir), "[{broken").unwrap();

    assert!(matches!(
        store.add("Dune", "Herbert"),
        Err(StoreError::Malformed { .. })
    ));
    assert!(matches!(
        store.remove("Dune"),
        Err(StoreError::Malformed { .. })
    ));

    // The broken file is untouched for manual repair.
    assert_eq!(
        std::fs::read_to_string(catalog_path(&dir)).unwrap(),
        "[{broken"
    );
}
