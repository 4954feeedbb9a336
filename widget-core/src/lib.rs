//! Core library for the terminal weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Request building and the OpenWeather client
//! - Device geolocation
//! - The widget state machine (actions, reducer, effects) and its runtime
//! - The pure render step
//!
//! It is used by `widget-cli`, but can also be reused by other front ends.

pub mod action;
pub mod config;
pub mod effect;
pub mod error;
pub mod geolocation;
pub mod icon;
pub mod model;
pub mod provider;
pub mod reducer;
pub mod render;
pub mod request;
pub mod runtime;
pub mod state;

pub use config::{Config, GeolocationConfig, GeolocationMode};
pub use error::{ErrorKind, FetchError, GeolocationError, WidgetError};
pub use icon::Icon;
pub use model::{Coordinates, QuerySource, WeatherSnapshot};
pub use provider::WeatherProvider;
pub use render::{View, render};
pub use runtime::Widget;
pub use state::{UiState, ViewState};
