use std::path::PathBuf;

use wellington::prelude::*;

fn load() -> Repository {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/wellington");
    Repository::new()
        .load_data(DataReader::new(Config::default()).from_dir(dir))
        .unwrap()
}

#[test]
fn exact_station_name_ranks_first() {
    let repository = load();
    let found = repository.search_stations_by_name("Petone");
    assert_eq!(&*found[0].name, "Petone");
}

#[test]
fn misspelled_station() {
    let repository = load();
    let found = repository.search_stations_by_name("petnoe");
    assert_eq!(found.first().map(|station| &*station.name), Some("Petone"));
}

#[test]
fn separators_match_spaces() {
    let repository = load();
    let found = repository.search_stations_by_name("upper hutt");
    assert_eq!(found.first().map(|station| &*station.name), Some("Upper-Hutt"));
}

#[test]
fn line_search_by_terminal() {
    let repository = load();
    let found: Vec<_> = repository
        .search_lines_by_name("melling")
        .into_iter()
        .take(2)
        .map(|line| line.name.to_string())
        .collect();
    assert_eq!(found, vec!["Melling_Wellington", "Wellington_Melling"]);
}

#[test]
fn unrelated_needle_finds_nothing() {
    let repository = load();
    assert!(repository.search_stations_by_name("zzzzzz").is_empty());
    assert!(repository.search_lines_by_name("").is_empty());
}
