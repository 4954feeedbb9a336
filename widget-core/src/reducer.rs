//! Reducer - pure function: (state, action) -> Transition

use crate::{
    action::Action,
    effect::Effect,
    error::{FETCH_FAILED_MESSAGE, FetchError, WidgetError},
    model::QuerySource,
    state::ViewState,
};

/// Next state plus the effects to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ViewState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &ViewState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }

    fn to(state: ViewState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

pub fn reduce(state: &ViewState, action: Action) -> Transition {
    match action {
        Action::Mount | Action::UseCurrentLocation => {
            Transition::unchanged(state).with(Effect::Locate)
        }

        Action::Search(input) => match QuerySource::city(&input) {
            Some(source) => Transition::to(state.fetching()).with(Effect::Fetch(source)),
            None => Transition::unchanged(state).with(Effect::Alert(WidgetError::Validation)),
        },

        Action::LocationResolved(Ok(coords)) => Transition::to(state.fetching())
            .with(Effect::Fetch(QuerySource::Coordinates(coords))),

        Action::LocationResolved(Err(err)) => {
            Transition::unchanged(state).with(Effect::Alert(err.into()))
        }

        Action::WeatherLoaded { source, snapshot } => {
            Transition::to(ViewState::loaded(snapshot, source.is_coordinates()))
        }

        Action::WeatherFailed(err @ FetchError::Provider { .. }) => {
            Transition::to(state.restored()).with(Effect::Alert(err.into()))
        }

        Action::WeatherFailed(FetchError::NetworkOrParse(_)) => {
            Transition::to(state.errored(FETCH_FAILED_MESSAGE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::GeolocationError,
        icon::Icon,
        model::{Coordinates, WeatherSnapshot},
        state::UiState,
    };

    fn snapshot(location: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: 21,
            feels_like: 20,
            humidity_pct: 60,
            wind_speed: 3.1,
            rain_last_hour_mm: 0.0,
            sunrise: "07:00:00".into(),
            sunset: "17:00:00".into(),
            location: location.into(),
            icon: Icon::Rain,
        }
    }

    fn loaded(location: &str, is_current_location: bool) -> ViewState {
        ViewState::new(UiState::Loaded(snapshot(location)), is_current_location)
    }

    #[test]
    fn mount_requests_location_without_state_change() {
        let state = ViewState::default();
        let t = reduce(&state, Action::Mount);

        assert_eq!(t.state, state);
        assert_eq!(t.effects, [Effect::Locate]);
    }

    #[test]
    fn empty_search_alerts_and_never_fetches() {
        let state = loaded("Paris", false);

        for input in ["", "   ", "\t\n"] {
            let t = reduce(&state, Action::Search(input.into()));

            assert_eq!(t.state, state);
            assert_eq!(t.effects, [Effect::Alert(WidgetError::Validation)]);
        }
    }

    #[test]
    fn search_clears_display_and_fetches_city() {
        let t = reduce(&loaded("Paris", true), Action::Search(" Oslo ".into()));

        assert!(t.state.ui.is_loading());
        assert_eq!(t.effects, [Effect::Fetch(QuerySource::City("Oslo".into()))]);
    }

    #[test]
    fn resolved_location_fetches_coordinates() {
        let coords = Coordinates::new(48.85, 2.35);
        let t = reduce(&ViewState::default(), Action::LocationResolved(Ok(coords)));

        assert!(t.state.ui.is_loading());
        assert_eq!(t.effects, [Effect::Fetch(QuerySource::Coordinates(coords))]);
    }

    #[test]
    fn geolocation_failure_alerts_and_keeps_display() {
        let state = loaded("Paris", false);
        let t = reduce(
            &state,
            Action::LocationResolved(Err(GeolocationError::Unsupported)),
        );

        assert_eq!(t.state, state);
        assert_eq!(
            t.effects,
            [Effect::Alert(WidgetError::Geolocation(GeolocationError::Unsupported))]
        );
    }

    #[test]
    fn coordinate_success_sets_current_location() {
        let state = loaded("Paris", false).fetching();
        let t = reduce(
            &state,
            Action::WeatherLoaded {
                source: QuerySource::Coordinates(Coordinates::new(0.0, 0.0)),
                snapshot: snapshot("Null Island"),
            },
        );

        assert!(t.state.is_current_location);
        assert_eq!(t.state.ui, UiState::Loaded(snapshot("Null Island")));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn city_success_clears_current_location() {
        let state = ViewState::default().fetching();
        let t = reduce(
            &state,
            Action::WeatherLoaded {
                source: QuerySource::City("Oslo".into()),
                snapshot: snapshot("Oslo"),
            },
        );

        assert!(!t.state.is_current_location);
    }

    #[test]
    fn success_replaces_previous_error() {
        let state = ViewState::new(UiState::Errored("boom".into()), true).fetching();
        let t = reduce(
            &state,
            Action::WeatherLoaded {
                source: QuerySource::City("Oslo".into()),
                snapshot: snapshot("Oslo"),
            },
        );

        assert_eq!(t.state.ui.error(), None);
        assert!(t.state.ui.snapshot().is_some());
    }

    #[test]
    fn network_failure_drops_snapshot_and_shows_generic_error() {
        let state = loaded("Paris", false).fetching();
        let t = reduce(
            &state,
            Action::WeatherFailed(FetchError::NetworkOrParse("connection reset".into())),
        );

        assert_eq!(t.state.ui, UiState::Errored(FETCH_FAILED_MESSAGE.into()));
        assert_eq!(t.state.ui.snapshot(), None);
        assert!(!t.state.is_current_location);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn provider_failure_alerts_and_leaves_stale_snapshot() {
        let before = loaded("Paris", false);
        let err = FetchError::Provider {
            status: 404,
            message: "city not found".into(),
        };
        let t = reduce(&before.fetching(), Action::WeatherFailed(err.clone()));

        assert_eq!(t.state, before);
        assert_eq!(t.effects, [Effect::Alert(WidgetError::Fetch(err))]);
    }
}
