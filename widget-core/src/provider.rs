use crate::{
    Config, QuerySource, WeatherSnapshot, error::FetchError,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current weather conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, source: &QuerySource) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    let provider = OpenWeatherProvider::new(api_key, &config.base_url)?;
    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_rejects_bad_base_url() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: "not a url".into(),
            ..Default::default()
        };

        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Invalid OpenWeather base URL"));
    }

    #[test]
    fn provider_from_config_works_when_key_set() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            ..Default::default()
        };

        assert!(provider_from_config(&cfg).is_ok());
    }
}
