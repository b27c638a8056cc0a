use crate::data::{
    Error,
    tokens::{names, parse_token, tokens},
};

/// One `<name> <zone> <distance>` record of `stations.data`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStation {
    pub name: String,
    pub zone: i32,
    pub distance: f64,
}

/// One departure token of a `<line>-services.data` file, in `HHMM` form.
/// Values that are not clock times (`-1` for "does not stop") are kept as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDeparture {
    pub hhmm: i32,
}

pub(crate) fn parse_stations(file: &str, content: &str) -> Result<Vec<RawStation>, Error> {
    let mut tokens = tokens(content);
    let mut stations = Vec::new();
    while let Some(name) = tokens.next() {
        let zone = tokens.next().ok_or_else(|| {
            Error::malformed(file, name.line, format!("station {} is missing its fare zone", name.text))
        })?;
        let distance = tokens.next().ok_or_else(|| {
            Error::malformed(file, name.line, format!("station {} is missing its distance", name.text))
        })?;

        let zone: i32 = parse_token(file, &zone, "fare zone")?;
        let distance: f64 = parse_token(file, &distance, "distance")?;
        if !distance.is_finite() {
            return Err(Error::malformed(
                file,
                name.line,
                format!("station {} has a non-finite distance", name.text),
            ));
        }

        stations.push(RawStation {
            name: name.text.to_string(),
            zone,
            distance,
        });
    }
    Ok(stations)
}

pub(crate) fn parse_names(content: &str) -> Vec<String> {
    names(content).map(|(_, name)| name.to_string()).collect()
}

pub(crate) fn parse_departures(file: &str, content: &str) -> Result<Vec<RawDeparture>, Error> {
    tokens(content)
        .map(|token| {
            let hhmm = parse_token(file, &token, "departure time")?;
            Ok(RawDeparture { hhmm })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stations_are_token_triples() {
        let stations = parse_stations("stations.data", "Ava 3 11.9 Petone\n2\n8.3\n").unwrap();
        assert_eq!(
            stations,
            vec![
                RawStation {
                    name: "Ava".into(),
                    zone: 3,
                    distance: 11.9
                },
                RawStation {
                    name: "Petone".into(),
                    zone: 2,
                    distance: 8.3
                },
            ]
        );
    }

    #[test]
    fn truncated_station_record() {
        let err = parse_stations("stations.data", "Ava 3 11.9\nPetone 2\n").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 2, .. }));
    }

    #[test]
    fn station_zone_must_be_integer() {
        let err = parse_stations("stations.data", "Ava three 11.9\n").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 1, .. }));
    }

    #[test]
    fn station_distance_must_be_finite() {
        let err = parse_stations("stations.data", "Ava 3 NaN\n").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 1, .. }));
    }

    #[test]
    fn departures_per_token() {
        let departures = parse_departures("x-services.data", "735 805\n\n1742\n").unwrap();
        let times: Vec<_> = departures.iter().map(|d| d.hhmm).collect();
        assert_eq!(times, vec![735, 805, 1742]);
    }

    #[test]
    fn departures_keep_any_integer() {
        let departures = parse_departures("x-services.data", "-1 705\n760\n").unwrap();
        let times: Vec<_> = departures.iter().map(|d| d.hhmm).collect();
        assert_eq!(times, vec![-1, 705, 760]);
    }

    #[test]
    fn departure_must_be_integer() {
        let err = parse_departures("x-services.data", "735\n7:35\n").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 2, .. }));
    }

    #[test]
    fn negative_zone() {
        let stations = parse_stations("stations.data", "Ava -1 11.9").unwrap();
        assert_eq!(stations[0].zone, -1);
    }
}
