//! Device location lookup.
//!
//! A terminal has no location API, so the "device" location is resolved from
//! configuration: an IP lookup, a fixed pair of coordinates, or nothing at all.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::fmt::Debug;
use tracing::{debug, error};

use crate::{
    config::{GeolocationConfig, GeolocationMode},
    error::GeolocationError,
    model::Coordinates,
};

/// Single-shot location lookup.
#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    async fn locate(&self) -> Result<Coordinates, GeolocationError>;
}

/// Resolves location from the public IP address via an ip-api.com style endpoint.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    endpoint: Url,
    http: Client,
}

impl IpGeolocator {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid geolocation endpoint: {endpoint}"))?;
        Ok(Self {
            endpoint,
            http: Client::new(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        let res = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| unavailable(e.to_string()))?;

        let body: IpApiResponse = res.json().await.map_err(|e| unavailable(e.to_string()))?;

        match (body.status.as_str(), body.lat, body.lon) {
            ("success", Some(lat), Some(lon)) => {
                let coords = Coordinates::new(lat, lon);
                debug!(%coords, "resolved location from IP");
                Ok(coords)
            }
            (status, _, _) => Err(unavailable(format!(
                "lookup status {status}: {}",
                body.message.as_deref().unwrap_or("no coordinates")
            ))),
        }
    }
}

fn unavailable(detail: String) -> GeolocationError {
    error!(%detail, "error getting location");
    GeolocationError::Unavailable(detail)
}

/// Always reports the same coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator(pub Coordinates);

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.0)
    }
}

/// Stands in when geolocation is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocator;

#[async_trait]
impl Geolocator for NoGeolocator {
    async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        error!("geolocation is not supported");
        Err(GeolocationError::Unsupported)
    }
}

/// Construct the geolocator selected by config.
pub fn geolocator_from_config(config: &GeolocationConfig) -> Result<Box<dyn Geolocator>> {
    let boxed: Box<dyn Geolocator> = match config.mode {
        GeolocationMode::Ip => Box::new(IpGeolocator::new(&config.endpoint)?),
        GeolocationMode::Fixed => {
            let coords = config.fixed_coordinates().ok_or_else(|| {
                anyhow::anyhow!(
                    "Geolocation mode 'fixed' needs both latitude and longitude.\n\
                     Hint: run `weather-widget configure` and enter your coordinates."
                )
            })?;
            Box::new(FixedGeolocator(coords))
        }
        GeolocationMode::Disabled => Box::new(NoGeolocator),
    };

    Ok(boxed)
}
