use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::{
    error::FetchError,
    icon::Icon,
    model::{QuerySource, WeatherSnapshot},
    request::{CURRENT_WEATHER_PATH, current_weather_url},
};

use super::WeatherProvider;

/// Format of sunrise/sunset times.
pub const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: Url,
    http: Client,
}

impl OpenWeatherProvider {
    /// `base_url` is the API origin, e.g. `https://api.openweathermap.org`.
    pub fn new(api_key: String, base_url: &str) -> Result<Self> {
        let endpoint = Url::parse(&format!(
            "{}/{CURRENT_WEATHER_PATH}",
            base_url.trim_end_matches('/')
        ))
        .with_context(|| format!("Invalid OpenWeather base URL: {base_url}"))?;

        Ok(Self {
            api_key,
            endpoint,
            http: Client::new(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
    rain: Option<OwRain>,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwErrorResponse {
    message: String,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, source: &QuerySource) -> Result<WeatherSnapshot, FetchError> {
        let url = current_weather_url(&self.endpoint, source, &self.api_key);
        debug!(?source, "requesting current weather");

        let res = self.http.get(url).send().await.map_err(|e| {
            error!(error = %e, "failed to send request to OpenWeather");
            FetchError::NetworkOrParse(e.to_string())
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            error!(error = %e, "failed to read OpenWeather response body");
            FetchError::NetworkOrParse(e.to_string())
        })?;

        if !status.is_success() {
            let parsed: OwErrorResponse = serde_json::from_str(&body).map_err(|e| {
                error!(%status, error = %e, "unreadable OpenWeather error body");
                FetchError::NetworkOrParse(e.to_string())
            })?;
            warn!(%status, message = %parsed.message, "OpenWeather rejected request");
            return Err(FetchError::Provider {
                status: status.as_u16(),
                message: parsed.message,
            });
        }

        let snapshot = parse_current(&body, &Local).inspect_err(|e| {
            error!(error = %e, "failed to parse OpenWeather current JSON");
        })?;
        debug!(location = %snapshot.location, "weather loaded");
        Ok(snapshot)
    }
}

/// Parse a current weather body into a snapshot, rendering times in `tz`.
pub fn parse_current<Tz>(body: &str, tz: &Tz) -> Result<WeatherSnapshot, FetchError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| FetchError::NetworkOrParse(e.to_string()))?;

    let icon = parsed
        .weather
        .first()
        .map(|w| Icon::for_condition(&w.icon))
        .unwrap_or(Icon::Clear);

    Ok(WeatherSnapshot {
        temperature: parsed.main.temp.floor() as i32,
        feels_like: parsed.main.feels_like.floor() as i32,
        humidity_pct: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        rain_last_hour_mm: parsed.rain.and_then(|r| r.one_hour).unwrap_or(0.0),
        sunrise: format_time(parsed.sys.sunrise, tz)?,
        sunset: format_time(parsed.sys.sunset, tz)?,
        location: parsed.name,
        icon,
    })
}

fn format_time<Tz>(epoch_secs: i64, tz: &Tz) -> Result<String, FetchError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let utc = DateTime::from_timestamp(epoch_secs, 0).ok_or_else(|| {
        FetchError::NetworkOrParse(format!("timestamp out of range: {epoch_secs}"))
    })?;
    Ok(utc.with_timezone(tz).format(TIME_FORMAT).to_string())
}
