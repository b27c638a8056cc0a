use std::{collections::HashSet, fs, path::PathBuf};

use wellington::prelude::*;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/wellington")
}

fn load() -> Repository {
    let data = DataReader::new(Config::default()).from_dir(fixture_dir());
    Repository::new().load_data(data).unwrap()
}

fn names<T: Identifiable>(items: Vec<&T>) -> Vec<&str> {
    items.into_iter().map(|item| item.name()).collect()
}

#[test]
fn lists_are_complete_and_sorted() {
    let repository = load();

    let stations = names(repository.list_stations());
    assert_eq!(stations.len(), 20);
    assert!(stations.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(stations.first(), Some(&"Ava"));
    assert_eq!(stations.last(), Some(&"Woburn"));

    let lines = names(repository.list_lines());
    assert_eq!(
        lines,
        vec![
            "Johnsonville_Wellington",
            "Melling_Wellington",
            "Upper-Hutt_Wellington",
            "Wellington_Johnsonville",
            "Wellington_Melling",
            "Wellington_Upper-Hutt",
        ]
    );
}

#[test]
fn counts_match_fixture() {
    let repository = load();
    assert_eq!(repository.station_count(), 20);
    assert_eq!(repository.line_count(), 6);
    // 5 + 4 + 3 + 3 + 6 + 4 departure tokens
    assert_eq!(repository.service_count(), 25);
}

#[test]
fn links_are_bidirectional() {
    let repository = load();
    let lines_file = fs::read_to_string(fixture_dir().join("train-lines.data")).unwrap();

    for line_name in lines_file.lines() {
        let stations_file =
            fs::read_to_string(fixture_dir().join(format!("{line_name}-stations.data"))).unwrap();
        let on_line: HashSet<_> = names(repository.stations_by_line_name(line_name).unwrap())
            .into_iter()
            .collect();

        for station_name in stations_file.lines() {
            let lines_at = names(repository.lines_by_station_name(station_name).unwrap());
            assert!(
                lines_at.contains(&line_name),
                "{station_name} should list {line_name}"
            );
            assert!(
                on_line.contains(station_name),
                "{line_name} should visit {station_name}"
            );
        }
    }
}

#[test]
fn stations_keep_file_order() {
    let repository = load();
    let stations = names(repository.stations_by_line_name("Melling_Wellington").unwrap());
    assert_eq!(
        stations,
        vec!["Melling", "Western-Hutt", "Petone", "Ngauranga", "Wellington"]
    );

    let reverse = names(repository.stations_by_line_name("Wellington_Melling").unwrap());
    assert_eq!(
        reverse,
        vec!["Wellington", "Ngauranga", "Petone", "Western-Hutt", "Melling"]
    );
}

#[test]
fn lines_at_station_are_a_sorted_set() {
    let repository = load();
    let lines = names(repository.lines_by_station_name("Petone").unwrap());
    assert_eq!(
        lines,
        vec![
            "Melling_Wellington",
            "Upper-Hutt_Wellington",
            "Wellington_Melling",
            "Wellington_Upper-Hutt",
        ]
    );
}

#[test]
fn station_without_lines() {
    let repository = load();
    let maymorn = repository.station_by_name("Maymorn").unwrap();
    assert_eq!(maymorn.zone, 9);
    assert!(repository.lines_by_station(maymorn).is_empty());
    assert!(repository.services_by_station_name("Maymorn").unwrap().is_empty());
}

#[test]
fn station_attributes() {
    let repository = load();
    let petone = repository.station_by_name("Petone").unwrap();
    assert_eq!(petone.zone, 3);
    assert_eq!(petone.distance, Distance::from_kilometers(8.3));
}

#[test]
fn services_on_line() {
    let repository = load();
    let services = repository
        .services_by_line_name("Wellington_Upper-Hutt")
        .unwrap();
    let times: Vec<_> = services
        .iter()
        .map(|service| {
            assert_eq!(service.departures.len(), 1);
            service.to_string()
        })
        .collect();
    assert_eq!(times, vec!["06:00", "06:30", "07:00", "07:30", "08:00", "17:30"]);

    let line = repository.line_by_name("Wellington_Upper-Hutt").unwrap();
    assert!(services.iter().all(|service| service.line_idx == line.index));
}

#[test]
fn leading_zero_departures() {
    let repository = load();
    let first = repository.services_by_line_name("Wellington_Johnsonville").unwrap()[0];
    assert_eq!(first.first_departure(), Some(615));
    assert_eq!(first.first_time(), Time::from_hhmm(615));
}

#[test]
fn departures_after_time() {
    let repository = load();
    let after = Time::from_hm("07:30").unwrap();
    let services = repository
        .departures_after("Wellington_Upper-Hutt", after)
        .unwrap();
    let times: Vec<_> = services.iter().map(|service| service.to_string()).collect();
    assert_eq!(times, vec!["07:30", "08:00", "17:30"]);

    let late = Time::from_hm("23:00").unwrap();
    assert!(repository.departures_after("Wellington_Upper-Hutt", late).unwrap().is_empty());
}

#[test]
fn services_at_station() {
    let repository = load();
    let by_line = repository.services_by_station_name("Ngaio").unwrap();
    let summary: Vec<_> = by_line
        .iter()
        .map(|(line, services)| (&*line.name, services.len()))
        .collect();
    assert_eq!(
        summary,
        vec![("Johnsonville_Wellington", 4), ("Wellington_Johnsonville", 5)]
    );
}

#[test]
fn route_exists_for_identical_line_sets() {
    let repository = load();
    assert_eq!(repository.route_exists("Ngaio", "Khandallah"), Some(true));
    assert_eq!(repository.route_exists("Ngauranga", "Petone"), Some(true));
    assert_eq!(repository.route_exists("Taita", "Taita"), Some(true));
}

#[test]
fn route_does_not_exist_when_line_sets_differ() {
    let repository = load();
    // Melling is served by 2 of Petone's 4 lines
    assert_eq!(repository.route_exists("Melling", "Petone"), Some(false));
    assert_eq!(repository.route_exists("Petone", "Melling"), Some(false));
    assert_eq!(repository.route_exists("Ngaio", "Taita"), Some(false));
}

#[test]
fn common_lines_are_the_intersection() {
    let repository = load();
    let common = names(repository.common_lines("Melling", "Petone").unwrap());
    assert_eq!(common, vec!["Melling_Wellington", "Wellington_Melling"]);
    assert!(repository.common_lines("Ngaio", "Taita").unwrap().is_empty());
}

#[test]
fn unknown_names_are_not_found() {
    let repository = load();
    assert!(repository.station_by_name("Paekakariki").is_none());
    assert!(repository.line_by_name("Wellington_Waikanae").is_none());
    assert!(repository.lines_by_station_name("Paekakariki").is_none());
    assert!(repository.stations_by_line_name("Wellington_Waikanae").is_none());
    assert!(repository.services_by_line_name("Wellington_Waikanae").is_none());
    assert!(repository.services_by_station_name("").is_none());
    assert!(repository.departures_after("Wellington_Waikanae", Time::default()).is_none());
    assert!(repository.route_exists("Ngaio", "Paekakariki").is_none());
    assert!(repository.route_exists("Paekakariki", "Ngaio").is_none());
    assert!(repository.common_lines("Paekakariki", "Ngaio").is_none());
}

#[test]
fn lookups_are_case_sensitive() {
    let repository = load();
    assert!(repository.station_by_name("petone").is_none());
}

#[test]
fn empty_repository_answers_nothing() {
    let repository = Repository::new();
    assert!(repository.list_stations().is_empty());
    assert!(repository.list_lines().is_empty());
    assert!(repository.lines_by_station_name("Petone").is_none());
}
