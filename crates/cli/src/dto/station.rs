use serde::{Deserialize, Serialize};
use wellington::prelude::*;

use crate::dto::{LineDto, LineServicesDto, Render, indented};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDto {
    pub name: String,
    pub zone: i32,
    pub distance_km: f64,
}

impl StationDto {
    pub fn from(station: &Station) -> Self {
        Self {
            name: station.name.to_string(),
            zone: station.zone,
            distance_km: station.distance.as_kilometers(),
        }
    }
}

impl Render for StationDto {
    fn render(&self) -> String {
        format!(
            "{} (zone {}, {:.2} km)",
            self.name, self.zone, self.distance_km
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationLinesDto {
    pub station: StationDto,
    pub lines: Vec<LineDto>,
}

impl StationLinesDto {
    pub fn from(station: &Station, repository: &Repository) -> Self {
        Self {
            station: StationDto::from(station),
            lines: repository
                .lines_by_station(station)
                .into_iter()
                .map(LineDto::from)
                .collect(),
        }
    }
}

impl Render for StationLinesDto {
    fn render(&self) -> String {
        let lines = indented(self.lines.iter().map(Render::render), "no lines");
        format!("{}\n{lines}\n", self.station.render())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationServicesDto {
    pub station: StationDto,
    pub lines: Vec<LineServicesDto>,
}

impl StationServicesDto {
    pub fn from(station: &Station, repository: &Repository) -> Self {
        Self {
            station: StationDto::from(station),
            lines: repository
                .services_by_station_name(&station.name)
                .unwrap_or_default()
                .into_iter()
                .map(|(line, services)| LineServicesDto::from(line, services))
                .collect(),
        }
    }
}

impl Render for StationServicesDto {
    fn render(&self) -> String {
        if self.lines.is_empty() {
            return format!("{} is not served by any train line", self.station.name);
        }
        format!(
            "{} has the following train lines and service times:\n{}",
            self.station.name,
            self.lines.render()
        )
    }
}
