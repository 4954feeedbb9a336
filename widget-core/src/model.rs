use std::fmt;

use crate::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Where the location for a fetch came from.
#[derive(Debug, Clone, PartialEq)]
pub enum QuerySource {
    Coordinates(Coordinates),
    City(String),
}

impl QuerySource {
    /// Validate user-typed input. Surrounding whitespace is dropped; nothing left is an error.
    pub fn city(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(QuerySource::City(trimmed.to_string()))
        }
    }

    pub fn is_coordinates(&self) -> bool {
        matches!(self, QuerySource::Coordinates(_))
    }
}

/// Display-ready weather for one location at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub rain_last_hour_mm: f64,
    pub sunrise: String,
    pub sunset: String,
    pub location: String,
    pub icon: Icon,
}
