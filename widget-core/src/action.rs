//! Actions - everything that can happen to the widget

use crate::{
    error::{FetchError, GeolocationError},
    model::{Coordinates, QuerySource, WeatherSnapshot},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ===== Intents =====
    /// Widget shown for the first time; start from the device location.
    Mount,

    /// Search submitted with the raw text of the input box.
    Search(String),

    /// Return to the device location.
    UseCurrentLocation,

    // ===== Results =====
    /// Result: device location lookup finished
    LocationResolved(Result<Coordinates, GeolocationError>),

    /// Result: weather fetched and normalised
    WeatherLoaded {
        source: QuerySource,
        snapshot: WeatherSnapshot,
    },

    /// Result: weather fetch failed
    WeatherFailed(FetchError),
}
