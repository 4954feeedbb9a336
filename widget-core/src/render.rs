//! Render view - pure function of the view state

use std::fmt;

use crate::{icon::Icon, model::WeatherSnapshot, state::{UiState, ViewState}};

pub const LOADING_TEXT: &str = "Loading...";

/// The results panel. Exactly one variant is ever shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Body<'a> {
    Error(&'a str),
    Snapshot(&'a WeatherSnapshot),
    Loading,
}

/// A rendered frame of the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    /// Whether the "use current location" control is offered.
    pub show_location_button: bool,
    pub body: Body<'a>,
}

pub fn render(state: &ViewState) -> View<'_> {
    let body = match &state.ui {
        UiState::Errored(message) => Body::Error(message),
        UiState::Loaded(snapshot) => Body::Snapshot(snapshot),
        UiState::Loading => Body::Loading,
    };

    View {
        show_location_button: !state.is_current_location,
        body,
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ Search ] (🔍)")?;
        if self.show_location_button {
            write!(f, " (📍 Current Location)")?;
        }
        writeln!(f)?;

        match &self.body {
            Body::Error(message) => writeln!(f, "{message}"),
            Body::Loading => writeln!(f, "{LOADING_TEXT}"),
            Body::Snapshot(s) => {
                writeln!(f, "{}  {}°C", s.icon.glyph(), s.temperature)?;
                writeln!(f, "Feels Like: {}°C", s.feels_like)?;
                writeln!(f, "{}", s.location)?;
                writeln!(f, "{} {}%  Humidity", Icon::Humidity.glyph(), s.humidity_pct)?;
                writeln!(f, "{} {} km/h  Wind Speed", Icon::Wind.glyph(), s.wind_speed)?;
                writeln!(
                    f,
                    "{} {} mm  Rain (last hour)",
                    Icon::Rain.glyph(),
                    s.rain_last_hour_mm
                )?;
                writeln!(f, "Sunrise: {}", s.sunrise)?;
                writeln!(f, "Sunset: {}", s.sunset)
            }
        }
    }
}
