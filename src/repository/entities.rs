use std::{fmt::Display, sync::Arc};

use crate::shared::{Identifiable, fuzzy, geo::Distance, time::Time};

/// A station on the regional network.
#[derive(Debug, Default, Clone)]
pub struct Station {
    /// The internal index used for O(1) array lookups in the repository.
    pub index: u32,
    /// Unique name, as written in the data files (e.g. "Upper-Hutt").
    pub name: Arc<str>,
    /// Search-optimized version of the name.
    pub normalized_name: Arc<str>,
    /// Fare zone. Carried for display, never computed on.
    pub zone: i32,
    pub distance: Distance,
}

impl Station {
    pub fn new(index: u32, name: &str, zone: i32, distance: Distance) -> Self {
        Self {
            index,
            name: name.into(),
            normalized_name: fuzzy::normalize(name).into(),
            zone,
            distance,
        }
    }
}

impl Identifiable for Station {
    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

impl Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (zone {}, {})", self.name, self.zone, self.distance)
    }
}

/// A named route visiting an ordered sequence of stations,
/// conventionally named `Origin_Destination`.
#[derive(Debug, Default, Clone)]
pub struct TrainLine {
    pub index: u32,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
}

impl TrainLine {
    pub fn new(index: u32, name: &str) -> Self {
        Self {
            index,
            name: name.into(),
            normalized_name: fuzzy::normalize(name).into(),
        }
    }

    /// Splits an `Origin_Destination` name.
    /// Returns None for names that do not follow the convention.
    pub fn terminals(&self) -> Option<(&str, &str)> {
        let (origin, destination) = self.name.split_once('_')?;
        if origin.is_empty() || destination.is_empty() || destination.contains('_') {
            return None;
        }
        Some((origin, destination))
    }
}

impl Identifiable for TrainLine {
    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

impl Display for TrainLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.terminals() {
            Some((origin, destination)) => write!(f, "{} ({origin} to {destination})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// One scheduled run of a line.
#[derive(Debug, Clone)]
pub struct TrainService {
    pub index: u32,
    /// Pointer to the owning [`TrainLine`].
    pub line_idx: u32,
    /// Departures in `HHMM` form as written in the services file, never empty.
    /// Values that are not clock times (such as `-1`) are kept as is.
    pub departures: Arc<[i32]>,
}

impl TrainService {
    pub fn first_departure(&self) -> Option<i32> {
        self.departures.first().copied()
    }

    /// The first departure as a clock time.
    /// None when it is not a valid `HHMM` value.
    pub fn first_time(&self) -> Option<Time> {
        self.first_departure().and_then(clock_time)
    }

    /// Departures formatted as `HH:MM`, or as written when not a clock time.
    pub fn departure_labels(&self) -> Vec<String> {
        self.departures
            .iter()
            .map(|&hhmm| match clock_time(hhmm) {
                Some(time) => time.to_string(),
                None => hhmm.to_string(),
            })
            .collect()
    }
}

fn clock_time(hhmm: i32) -> Option<Time> {
    u32::try_from(hhmm).ok().and_then(Time::from_hhmm)
}

impl Display for TrainService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.departure_labels().join(" "))
    }
}

#[test]
fn line_terminals() {
    let line = TrainLine::new(0, "Wellington_Upper-Hutt");
    assert_eq!(line.terminals(), Some(("Wellington", "Upper-Hutt")));
    assert_eq!(line.to_string(), "Wellington_Upper-Hutt (Wellington to Upper-Hutt)");
}

#[test]
fn line_without_terminals() {
    assert_eq!(TrainLine::new(0, "Hutt-Valley").terminals(), None);
    assert_eq!(TrainLine::new(0, "A_B_C").terminals(), None);
    assert_eq!(TrainLine::new(0, "_Wellington").terminals(), None);
}

#[test]
fn station_display() {
    let station = Station::new(0, "Petone", 3, Distance::from_kilometers(8.3));
    assert_eq!(station.to_string(), "Petone (zone 3, 8.30 km)");
    assert_eq!(&*station.normalized_name, "petone");
}

#[test]
fn service_departures() {
    let service = TrainService {
        index: 0,
        line_idx: 0,
        departures: Arc::from([-1, 705, 760]),
    };
    assert_eq!(service.first_departure(), Some(-1));
    assert_eq!(service.first_time(), None);
    assert_eq!(service.to_string(), "-1 07:05 760");
}
