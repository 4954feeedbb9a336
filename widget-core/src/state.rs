//! View state - single source of truth for what the widget shows

use crate::model::WeatherSnapshot;

/// What the results panel shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Loading,
    Loaded(WeatherSnapshot),
    Errored(String),
}

impl UiState {
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            UiState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

/// Everything the render step needs, replaced wholesale on each transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub ui: UiState,

    /// Whether the last successful fetch used device coordinates.
    pub is_current_location: bool,

    /// Display that was showing when the in-flight fetch began.
    before_fetch: Option<Box<UiState>>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            ui: UiState::Loading,
            is_current_location: true,
            before_fetch: None,
        }
    }
}

impl ViewState {
    pub fn new(ui: UiState, is_current_location: bool) -> Self {
        Self {
            ui,
            is_current_location,
            before_fetch: None,
        }
    }

    /// Clear the display for a new fetch, remembering what it replaced.
    ///
    /// Overlapping fetches keep the display from before the first one.
    pub(crate) fn fetching(&self) -> Self {
        let before_fetch = match &self.ui {
            UiState::Loading => self.before_fetch.clone(),
            shown => Some(Box::new(shown.clone())),
        };
        Self {
            ui: UiState::Loading,
            is_current_location: self.is_current_location,
            before_fetch,
        }
    }

    /// A fresh snapshot replaces whatever was shown, pending restore included.
    pub(crate) fn loaded(snapshot: WeatherSnapshot, by_coordinates: bool) -> Self {
        Self::new(UiState::Loaded(snapshot), by_coordinates)
    }

    pub(crate) fn errored(&self, message: impl Into<String>) -> Self {
        Self::new(UiState::Errored(message.into()), self.is_current_location)
    }

    /// Put back the display from before the in-flight fetch.
    pub(crate) fn restored(&self) -> Self {
        let ui = match &self.before_fetch {
            Some(before) => (**before).clone(),
            None => self.ui.clone(),
        };
        Self::new(ui, self.is_current_location)
    }
}
