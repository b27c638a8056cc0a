use serde::{Deserialize, Serialize};
use wellington::prelude::*;

use crate::dto::{Render, StationDto, indented};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineDto {
    pub name: String,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl LineDto {
    pub fn from(line: &TrainLine) -> Self {
        let (origin, destination) = match line.terminals() {
            Some((origin, destination)) => (Some(origin.to_string()), Some(destination.to_string())),
            None => (None, None),
        };
        Self {
            name: line.name.to_string(),
            origin,
            destination,
        }
    }
}

impl Render for LineDto {
    fn render(&self) -> String {
        match (&self.origin, &self.destination) {
            (Some(origin), Some(destination)) => {
                format!("{} ({origin} to {destination})", self.name)
            }
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineStationsDto {
    pub line: LineDto,
    pub stations: Vec<StationDto>,
}

impl LineStationsDto {
    pub fn from(line: &TrainLine, repository: &Repository) -> Self {
        Self {
            line: LineDto::from(line),
            stations: repository
                .stations_by_line(line)
                .into_iter()
                .map(StationDto::from)
                .collect(),
        }
    }
}

impl Render for LineStationsDto {
    fn render(&self) -> String {
        let stations = indented(
            self.stations
                .iter()
                .enumerate()
                .map(|(i, station)| format!("{:>2}. {}", i + 1, station.render())),
            "no stations",
        );
        format!("{}\n{stations}\n", self.line.render())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDto {
    /// Departures as written in the data, `HHMM`.
    pub departures: Vec<i32>,
    pub times: Vec<String>,
}

impl ServiceDto {
    pub fn from(service: &TrainService) -> Self {
        Self {
            departures: service.departures.to_vec(),
            times: service.departure_labels(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineServicesDto {
    pub line: LineDto,
    pub services: Vec<ServiceDto>,
}

impl LineServicesDto {
    pub fn from(line: &TrainLine, services: Vec<&TrainService>) -> Self {
        Self {
            line: LineDto::from(line),
            services: services.into_iter().map(ServiceDto::from).collect(),
        }
    }
}

impl Render for LineServicesDto {
    fn render(&self) -> String {
        let services = indented(
            self.services.iter().map(|service| service.times.join(" ")),
            "no services",
        );
        format!("{}\n{services}\n", self.line.render())
    }
}
