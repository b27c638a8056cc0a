use std::fmt::Display;

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: u32 = 60;
/// Largest hour whose `HHMM` form still fits in a u32.
const MAX_HOURS: u32 = u32::MAX / 100;

/// A scheduled departure, stored as minutes since midnight.
///
/// The data files write times as plain `HHMM` integers (`735` is 07:35), so
/// the hour part is not capped at 23: services running past midnight keep
/// counting up (`2415`). Hours never exceed [`MAX_HOURS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct Time(u32);

impl Time {
    pub fn now() -> Self {
        let now = Local::now();
        Self(now.hour() * MINUTES_PER_HOUR + now.minute())
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::from_parts(minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }

    /// Builds a time from its `HHMM` integer form.
    /// Returns None when the minute part is 60 or more.
    pub fn from_hhmm(value: u32) -> Option<Self> {
        Self::from_parts(value / 100, value % 100)
    }

    pub fn as_hhmm(&self) -> u32 {
        // hours <= MAX_HOURS, so this stays within u32
        self.hours() * 100 + self.minutes()
    }

    pub const fn hours(&self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    pub const fn minutes(&self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    pub fn to_hm_string(&self) -> String {
        format!("{:02}:{:02}", self.hours(), self.minutes())
    }

    /// Parses `HH:MM`.
    pub fn from_hm(time: &str) -> Option<Self> {
        let (hours, minutes) = time.split_once(':')?;
        Self::from_parts(hours.parse().ok()?, minutes.parse().ok()?)
    }

    fn from_parts(hours: u32, minutes: u32) -> Option<Self> {
        if minutes >= MINUTES_PER_HOUR || hours > MAX_HOURS {
            return None;
        }
        hours
            .checked_mul(MINUTES_PER_HOUR)?
            .checked_add(minutes)
            .map(Self)
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl From<Time> for u32 {
    fn from(value: Time) -> Self {
        value.as_hhmm()
    }
}

impl TryFrom<u32> for Time {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_hhmm(value).ok_or_else(|| format!("{value} is not a valid HHMM time"))
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_2() {
    let time = "07:35";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_3() {
    let time = "24:15";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn hhmm_round_trip() {
    let time = Time::from_hhmm(1742).unwrap();
    assert_eq!(time.as_hhmm(), 1742);
    assert_eq!(time.as_minutes(), 17 * 60 + 42);
}

#[test]
fn invalid_hhmm() {
    assert!(Time::from_hhmm(1260).is_none());
}

#[test]
fn invalid_hm() {
    assert!(Time::from_hm("7:3a").is_none());
    assert!(Time::from_hm("0735").is_none());
    assert!(Time::from_hm("07:75").is_none());
}

#[test]
fn huge_hours_are_rejected() {
    assert!(Time::from_hm("99999999:00").is_none());
    assert!(Time::from_hm("42949673:00").is_none());
    assert!(Time::from_minutes(u32::MAX).is_none());
}

#[test]
fn largest_time_keeps_hhmm() {
    let time = Time::from_hm("42949672:59").unwrap();
    assert_eq!(time.as_hhmm(), 4_294_967_259);
    assert_eq!(Time::from_hhmm(4_294_967_259), Some(time));
}
