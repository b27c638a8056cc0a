use std::{collections::HashMap, sync::Arc};

mod entities;
mod source;
pub use entities::*;

use crate::shared::{self, time::Time};

type NameToIndex = HashMap<Arc<str>, u32>;
type IndexToIndexes = Box<[Box<[u32]>]>;

/// The loaded catalog of stations, lines and services.
///
/// A repository is only ever built by [`Repository::load_data`] and has no
/// mutating methods, so every query runs against a fully linked data set.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    stations: Box<[Station]>,
    lines: Box<[TrainLine]>,
    services: Box<[TrainService]>,

    station_lookup: NameToIndex,
    line_lookup: NameToIndex,
    // Indexes ordered by name
    sorted_stations: Box<[u32]>,
    sorted_lines: Box<[u32]>,
    // Travel order, may repeat a station
    line_to_stations: IndexToIndexes,
    // Set semantics, ordered by line name
    station_to_lines: IndexToIndexes,
    line_to_services: IndexToIndexes,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Get a station with the given name.
    /// If no station is found with the given name None is returned.
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        let index = self.station_lookup.get(name)?;
        Some(&self.stations[*index as usize])
    }

    /// Get a line with the given name.
    /// If no line is found with the given name None is returned.
    pub fn line_by_name(&self, name: &str) -> Option<&TrainLine> {
        let index = self.line_lookup.get(name)?;
        Some(&self.lines[*index as usize])
    }

    /// All stations ordered by name.
    pub fn list_stations(&self) -> Vec<&Station> {
        self.sorted_stations
            .iter()
            .map(|idx| &self.stations[*idx as usize])
            .collect()
    }

    /// All lines ordered by name.
    pub fn list_lines(&self) -> Vec<&TrainLine> {
        self.sorted_lines
            .iter()
            .map(|idx| &self.lines[*idx as usize])
            .collect()
    }

    /// Returns the lines serving a station, ordered by name.
    /// If no station was found with the given name None is returned.
    pub fn lines_by_station_name(&self, station_name: &str) -> Option<Vec<&TrainLine>> {
        let station = self.station_by_name(station_name)?;
        Some(self.lines_by_station(station))
    }

    pub fn lines_by_station(&self, station: &Station) -> Vec<&TrainLine> {
        self.station_to_lines[station.index as usize]
            .iter()
            .map(|idx| &self.lines[*idx as usize])
            .collect()
    }

    /// Returns the stations a line visits, in travel order.
    /// If no line was found with the given name None is returned.
    pub fn stations_by_line_name(&self, line_name: &str) -> Option<Vec<&Station>> {
        let line = self.line_by_name(line_name)?;
        Some(self.stations_by_line(line))
    }

    pub fn stations_by_line(&self, line: &TrainLine) -> Vec<&Station> {
        self.line_to_stations[line.index as usize]
            .iter()
            .map(|idx| &self.stations[*idx as usize])
            .collect()
    }

    /// Returns the services running on a line, in file order.
    /// If no line was found with the given name None is returned.
    pub fn services_by_line_name(&self, line_name: &str) -> Option<Vec<&TrainService>> {
        let line = self.line_by_name(line_name)?;
        Some(self.services_by_line(line))
    }

    pub fn services_by_line(&self, line: &TrainLine) -> Vec<&TrainService> {
        self.line_to_services[line.index as usize]
            .iter()
            .map(|idx| &self.services[*idx as usize])
            .collect()
    }

    /// Services on a line whose first departure is at or after `time`, earliest first.
    /// Services whose first departure is not a clock time are left out.
    pub fn departures_after(&self, line_name: &str, time: Time) -> Option<Vec<&TrainService>> {
        let mut services: Vec<_> = self
            .services_by_line_name(line_name)?
            .into_iter()
            .filter(|service| service.first_time().is_some_and(|first| first >= time))
            .collect();
        services.sort_by_key(|service| service.first_time());
        Some(services)
    }

    /// Every line serving a station together with that line's services.
    /// If no station was found with the given name None is returned.
    pub fn services_by_station_name(
        &self,
        station_name: &str,
    ) -> Option<Vec<(&TrainLine, Vec<&TrainService>)>> {
        Some(
            self.lines_by_station_name(station_name)?
                .into_iter()
                .map(|line| (line, self.services_by_line(line)))
                .collect(),
        )
    }

    /// True when both stations are served by exactly the same set of lines.
    ///
    /// Two stations sharing only some of their lines are not considered
    /// connected; see [`Repository::common_lines`] for the lines they share.
    /// If either station is unknown None is returned.
    pub fn route_exists(&self, from: &str, to: &str) -> Option<bool> {
        let from = self.station_by_name(from)?;
        let to = self.station_by_name(to)?;
        Some(
            self.station_to_lines[from.index as usize]
                == self.station_to_lines[to.index as usize],
        )
    }

    /// Lines serving both stations, ordered by name.
    /// If either station is unknown None is returned.
    pub fn common_lines(&self, from: &str, to: &str) -> Option<Vec<&TrainLine>> {
        let from = self.station_by_name(from)?;
        let to = &self.station_to_lines[self.station_by_name(to)?.index as usize];
        Some(
            self.station_to_lines[from.index as usize]
                .iter()
                .filter(|idx| to.contains(*idx))
                .map(|idx| &self.lines[*idx as usize])
                .collect(),
        )
    }

    /// Does a fuzzy search on all the stations, comparing their name to the needle.
    pub fn search_stations_by_name<'a>(&'a self, needle: &str) -> Vec<&'a Station> {
        shared::search(needle, &self.stations)
    }

    /// Does a fuzzy search on all the lines, comparing their name to the needle.
    pub fn search_lines_by_name<'a>(&'a self, needle: &str) -> Vec<&'a TrainLine> {
        shared::search(needle, &self.lines)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }
}
