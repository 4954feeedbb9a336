//! Effect runtime - drives the reducer against real (or fake) services

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::{
    action::Action,
    effect::Effect,
    error::WidgetError,
    geolocation::Geolocator,
    model::Coordinates,
    provider::WeatherProvider,
    reducer::reduce,
    state::ViewState,
};

/// The weather widget: state plus the services its effects need.
#[derive(Debug)]
pub struct Widget {
    provider: Box<dyn WeatherProvider>,
    geolocator: Box<dyn Geolocator>,
    state: ViewState,
}

impl Widget {
    pub fn new(provider: Box<dyn WeatherProvider>, geolocator: Box<dyn Geolocator>) -> Self {
        Self {
            provider,
            geolocator,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub async fn mount(&mut self) -> Vec<WidgetError> {
        self.dispatch(Action::Mount).await
    }

    pub async fn search(&mut self, input: &str) -> Vec<WidgetError> {
        self.dispatch(Action::Search(input.to_string())).await
    }

    pub async fn use_current_location(&mut self) -> Vec<WidgetError> {
        self.dispatch(Action::UseCurrentLocation).await
    }

    /// Fetch for explicit coordinates, as if the device had reported them.
    pub async fn fetch_coordinates(&mut self, coords: Coordinates) -> Vec<WidgetError> {
        self.dispatch(Action::LocationResolved(Ok(coords))).await
    }

    /// Run `action` and every follow-up it causes. Returns the alerts raised on the way.
    pub async fn dispatch(&mut self, action: Action) -> Vec<WidgetError> {
        let mut alerts = Vec::new();
        let mut queue = VecDeque::from([action]);

        while let Some(action) = queue.pop_front() {
            debug!(?action, "dispatch");
            let transition = reduce(&self.state, action);
            self.state = transition.state;

            for effect in transition.effects {
                match effect {
                    Effect::Locate => {
                        queue.push_back(Action::LocationResolved(self.geolocator.locate().await));
                    }
                    Effect::Fetch(source) => {
                        let next = match self.provider.current(&source).await {
                            Ok(snapshot) => Action::WeatherLoaded { source, snapshot },
                            Err(err) => Action::WeatherFailed(err),
                        };
                        queue.push_back(next);
                    }
                    Effect::Alert(err) => {
                        warn!(kind = ?err.kind(), "{err}");
                        alerts.push(err);
                    }
                }
            }
        }

        alerts
    }
}
