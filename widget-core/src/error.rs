use thiserror::Error;

/// Inline message shown when a fetch fails below the provider level.
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching weather data";

/// Failure of a single weather fetch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// Transport failure, or a body that could not be decoded.
    #[error("Error fetching weather data: {0}")]
    NetworkOrParse(String),
}

/// Failure to resolve the device location.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("Unable to retrieve your location")]
    Unavailable(String),

    #[error("Geolocation is not supported on this device.")]
    Unsupported,
}

/// Every error the widget can surface to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidgetError {
    #[error("Please enter a city name")]
    Validation,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ValidationError,
    ProviderError,
    NetworkOrParseError,
    GeolocationError,
}

impl WidgetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WidgetError::Validation => ErrorKind::ValidationError,
            WidgetError::Fetch(FetchError::Provider { .. }) => ErrorKind::ProviderError,
            WidgetError::Fetch(FetchError::NetworkOrParse(_)) => ErrorKind::NetworkOrParseError,
            WidgetError::Geolocation(_) => ErrorKind::GeolocationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_provider_message_only() {
        let err = WidgetError::from(FetchError::Provider {
            status: 404,
            message: "city not found".into(),
        });

        assert_eq!(err.to_string(), "city not found");
        assert_eq!(err.kind(), ErrorKind::ProviderError);
    }

    #[test]
    fn geolocation_detail_is_not_shown_to_user() {
        let err = WidgetError::from(GeolocationError::Unavailable("timeout".into()));

        assert_eq!(err.to_string(), "Unable to retrieve your location");
        assert_eq!(err.kind(), ErrorKind::GeolocationError);
    }
}
