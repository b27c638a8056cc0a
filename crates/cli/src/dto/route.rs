use serde::{Deserialize, Serialize};
use wellington::prelude::*;

use crate::dto::{LineDto, LineStationsDto, Render, StationDto, indented};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDto {
    pub from: String,
    pub to: String,
    pub exists: bool,
    /// Lines of the origin station with their stations, only when `exists`.
    pub lines: Vec<LineStationsDto>,
    /// Lines serving both stations, whether or not `exists`.
    pub common_lines: Vec<LineDto>,
}

impl Render for RouteDto {
    fn render(&self) -> String {
        if !self.exists {
            let mut text =
                "Unable to travel between selected stations without a train connection!"
                    .to_string();
            if !self.common_lines.is_empty() {
                let names: Vec<_> = self.common_lines.iter().map(|line| line.name.as_str()).collect();
                text.push_str(&format!("\nLines serving both stations: {}", names.join(", ")));
            }
            return text;
        }
        self.lines
            .iter()
            .map(|line| {
                let stations: Vec<_> = line.stations.iter().map(|station| station.name.as_str()).collect();
                format!("Stations visited by {} : {}", line.line.name, stations.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDto {
    pub stations: Vec<StationDto>,
    pub lines: Vec<LineDto>,
}

impl SearchDto {
    pub fn from(stations: Vec<&Station>, lines: Vec<&TrainLine>) -> Self {
        Self {
            stations: stations.into_iter().map(StationDto::from).collect(),
            lines: lines.into_iter().map(LineDto::from).collect(),
        }
    }
}

impl Render for SearchDto {
    fn render(&self) -> String {
        let stations = indented(self.stations.iter().map(Render::render), "no stations");
        let lines = indented(self.lines.iter().map(Render::render), "no lines");
        format!("Stations:\n{stations}\nLines:\n{lines}")
    }
}
