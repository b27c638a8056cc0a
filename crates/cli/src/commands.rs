use serde::Serialize;
use thiserror::Error;
use wellington::prelude::*;

use crate::{
    Command,
    dto::{
        LineDto, LineServicesDto, LineStationsDto, Render, RouteDto, SearchDto, StationDto,
        StationLinesDto, StationServicesDto,
    },
};

const SUGGESTIONS: usize = 3;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No station named '{name}'.{}", did_you_mean(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },
    #[error("No line named '{name}'.{}", did_you_mean(.suggestions))]
    UnknownLine {
        name: String,
        suggestions: Vec<String>,
    },
    #[error("Invalid time '{0}', expected HH:MM or \"now\"")]
    InvalidTime(String),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" Did you mean: {}?", suggestions.join(", "))
    }
}

pub fn run(repository: &Repository, command: Command, json: bool) -> Result<(), Error> {
    match command {
        Command::Stations => {
            let stations: Vec<_> = repository
                .list_stations()
                .into_iter()
                .map(StationDto::from)
                .collect();
            print(&stations, json)
        }
        Command::Lines => {
            let lines: Vec<_> = repository
                .list_lines()
                .into_iter()
                .map(LineDto::from)
                .collect();
            print(&lines, json)
        }
        Command::StationLines => {
            let stations: Vec<_> = repository
                .list_stations()
                .into_iter()
                .map(|station| StationLinesDto::from(station, repository))
                .collect();
            print(&stations, json)
        }
        Command::LineStations => {
            let lines: Vec<_> = repository
                .list_lines()
                .into_iter()
                .map(|line| LineStationsDto::from(line, repository))
                .collect();
            print(&lines, json)
        }
        Command::LinesAt { station } => {
            let station = find_station(repository, &station)?;
            print(&StationLinesDto::from(station, repository), json)
        }
        Command::StationsOn { line } => {
            let line = find_line(repository, &line)?;
            print(&LineStationsDto::from(line, repository), json)
        }
        Command::Services { line, after } => {
            let line = find_line(repository, &line)?;
            let services = match after {
                Some(after) => {
                    let time = parse_time(&after)?;
                    repository
                        .departures_after(&line.name, time)
                        .unwrap_or_default()
                }
                None => repository.services_by_line(line),
            };
            print(&LineServicesDto::from(line, services), json)
        }
        Command::StationServices { station } => {
            let station = find_station(repository, &station)?;
            print(&StationServicesDto::from(station, repository), json)
        }
        Command::Route { from, to } => {
            let from = find_station(repository, &from)?;
            let to = find_station(repository, &to)?;
            let exists = repository
                .route_exists(&from.name, &to.name)
                .unwrap_or_default();
            let lines = if exists {
                repository
                    .lines_by_station(from)
                    .into_iter()
                    .map(|line| LineStationsDto::from(line, repository))
                    .collect()
            } else {
                Vec::new()
            };
            let common_lines = repository
                .common_lines(&from.name, &to.name)
                .unwrap_or_default()
                .into_iter()
                .map(LineDto::from)
                .collect();
            let route = RouteDto {
                from: from.name.to_string(),
                to: to.name.to_string(),
                exists,
                lines,
                common_lines,
            };
            print(&route, json)
        }
        Command::Search { text } => {
            let result = SearchDto::from(
                repository.search_stations_by_name(&text),
                repository.search_lines_by_name(&text),
            );
            print(&result, json)
        }
    }
}

fn print<T: Serialize + Render>(value: &T, json: bool) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", value.render());
    }
    Ok(())
}

fn find_station<'a>(repository: &'a Repository, name: &str) -> Result<&'a Station, Error> {
    repository
        .station_by_name(name)
        .ok_or_else(|| Error::UnknownStation {
            name: name.to_string(),
            suggestions: repository
                .search_stations_by_name(name)
                .into_iter()
                .take(SUGGESTIONS)
                .map(|station| station.name.to_string())
                .collect(),
        })
}

fn find_line<'a>(repository: &'a Repository, name: &str) -> Result<&'a TrainLine, Error> {
    repository
        .line_by_name(name)
        .ok_or_else(|| Error::UnknownLine {
            name: name.to_string(),
            suggestions: repository
                .search_lines_by_name(name)
                .into_iter()
                .take(SUGGESTIONS)
                .map(|line| line.name.to_string())
                .collect(),
        })
}

fn parse_time(value: &str) -> Result<Time, Error> {
    if value.eq_ignore_ascii_case("now") {
        return Ok(Time::now());
    }
    Time::from_hm(value).ok_or_else(|| Error::InvalidTime(value.to_string()))
}
