use crate::{
    data::{self, DataReader},
    repository::{Repository, Station, TrainLine, TrainService},
    shared::geo::Distance,
};
use std::{collections::HashMap, sync::Arc, time::Instant};
use tracing::{debug, warn};

/// Station <-> line membership while a data set is being read.
/// [`Membership::link`] is the only way to record a visit and always updates both sides.
#[derive(Debug, Default)]
struct Membership {
    line_to_stations: Vec<Vec<u32>>,
    station_to_lines: Vec<Vec<u32>>,
}

impl Membership {
    fn new(station_count: usize) -> Self {
        Self {
            line_to_stations: Vec::new(),
            station_to_lines: vec![Vec::new(); station_count],
        }
    }

    fn add_line(&mut self) {
        self.line_to_stations.push(Vec::new());
    }

    fn link(&mut self, line_idx: u32, station_idx: u32) {
        self.line_to_stations[line_idx as usize].push(station_idx);
        let lines = &mut self.station_to_lines[station_idx as usize];
        if !lines.contains(&line_idx) {
            lines.push(line_idx);
        }
    }
}

impl Repository {
    /// Builds a repository from a data set.
    /// Any missing file, malformed record or dangling station reference fails the whole load.
    pub fn load_data(mut self, data: DataReader) -> Result<Self, data::Error> {
        let now = Instant::now();
        self.load_stations(&data)?;
        self.load_lines(&data)?;
        self.generate_name_order();
        debug!(
            "Loaded {} stations, {} lines and {} services in {:?}",
            self.stations.len(),
            self.lines.len(),
            self.services.len(),
            now.elapsed()
        );
        Ok(self)
    }

    fn load_stations(&mut self, data: &DataReader) -> Result<(), data::Error> {
        debug!("Loading stations...");
        let now = Instant::now();
        let mut station_lookup: HashMap<Arc<str>, u32> = HashMap::new();
        let mut stations: Vec<Station> = Vec::new();
        data.stream_stations(|(i, raw)| {
            let value = Station::new(
                i as u32,
                &raw.name,
                raw.zone,
                Distance::from_kilometers(raw.distance),
            );
            if station_lookup.insert(value.name.clone(), value.index).is_some() {
                return Err(data::Error::DuplicateStation(raw.name));
            }
            stations.push(value);
            Ok(())
        })?;
        self.stations = stations.into();
        self.station_lookup = station_lookup;
        debug!("Loading stations took {:?}", now.elapsed());
        Ok(())
    }

    fn load_lines(&mut self, data: &DataReader) -> Result<(), data::Error> {
        debug!("Loading lines...");
        let now = Instant::now();
        let mut line_lookup: HashMap<Arc<str>, u32> = HashMap::new();
        let mut lines: Vec<TrainLine> = Vec::new();
        data.stream_lines(|(i, name)| {
            let value = TrainLine::new(i as u32, &name);
            if line_lookup.insert(value.name.clone(), value.index).is_some() {
                return Err(data::Error::DuplicateLine(name));
            }
            lines.push(value);
            Ok(())
        })?;

        let mut membership = Membership::new(self.stations.len());
        let mut services: Vec<TrainService> = Vec::new();
        let mut line_to_services: Vec<Vec<u32>> = Vec::with_capacity(lines.len());
        for line in lines.iter() {
            membership.add_line();
            data.stream_line_stations(&line.name, |(_, station_name)| {
                let station_idx = *self.station_lookup.get(station_name.as_str()).ok_or_else(
                    || data::Error::UnknownStation {
                        line: line.name.to_string(),
                        station: station_name.clone(),
                    },
                )?;
                membership.link(line.index, station_idx);
                Ok(())
            })?;

            // Every departure token is its own single-time service
            let mut line_services: Vec<u32> = Vec::new();
            data.stream_line_departures(&line.name, |(_, departure)| {
                let index = services.len() as u32;
                services.push(TrainService {
                    index,
                    line_idx: line.index,
                    departures: Arc::from([departure.hhmm]),
                });
                line_services.push(index);
                Ok(())
            })?;
            if line_services.is_empty() {
                warn!("Line {} has no services", line.name);
            }
            line_to_services.push(line_services);
        }

        self.lines = lines.into();
        self.line_lookup = line_lookup;
        self.services = services.into();
        self.line_to_services = line_to_services.into_iter().map(|val| val.into()).collect();
        self.line_to_stations = membership
            .line_to_stations
            .into_iter()
            .map(|val| val.into())
            .collect();
        self.station_to_lines = membership
            .station_to_lines
            .into_iter()
            .map(|mut val| {
                val.sort_by(|a, b| self.lines[*a as usize].name.cmp(&self.lines[*b as usize].name));
                val.into()
            })
            .collect();
        debug!("Loading lines took {:?}", now.elapsed());
        Ok(())
    }

    fn generate_name_order(&mut self) {
        let mut sorted_stations: Vec<u32> = (0..self.stations.len() as u32).collect();
        sorted_stations.sort_by(|a, b| {
            self.stations[*a as usize]
                .name
                .cmp(&self.stations[*b as usize].name)
        });
        self.sorted_stations = sorted_stations.into();

        let mut sorted_lines: Vec<u32> = (0..self.lines.len() as u32).collect();
        sorted_lines.sort_by(|a, b| self.lines[*a as usize].name.cmp(&self.lines[*b as usize].name));
        self.sorted_lines = sorted_lines.into();
    }
}
