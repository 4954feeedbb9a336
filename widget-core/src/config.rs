use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::model::Coordinates;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "WEATHER_APP_ID";

/// Key captured from the build environment, if any.
const BUILD_API_KEY: Option<&str> = option_env!("WEATHER_APP_ID");

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_GEOLOCATION_ENDPOINT: &str = "http://ip-api.com/json";

/// How the device location is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeolocationMode {
    /// Look up the public IP address.
    #[default]
    Ip,
    /// Use the configured latitude/longitude.
    Fixed,
    /// Report geolocation as unsupported.
    Disabled,
}

impl GeolocationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeolocationMode::Ip => "ip",
            GeolocationMode::Fixed => "fixed",
            GeolocationMode::Disabled => "disabled",
        }
    }

    pub const fn all() -> &'static [GeolocationMode] {
        &[
            GeolocationMode::Ip,
            GeolocationMode::Fixed,
            GeolocationMode::Disabled,
        ]
    }
}

impl std::fmt::Display for GeolocationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeolocationConfig {
    #[serde(default)]
    pub mode: GeolocationMode,

    #[serde(default = "default_geolocation_endpoint")]
    pub endpoint: String,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

fn default_geolocation_endpoint() -> String {
    DEFAULT_GEOLOCATION_ENDPOINT.to_string()
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            mode: GeolocationMode::default(),
            endpoint: default_geolocation_endpoint(),
            latitude: None,
            longitude: None,
        }
    }
}

impl GeolocationConfig {
    /// Fixed coordinates, when both halves are configured.
    pub fn fixed_coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
///
/// [geolocation]
/// mode = "fixed"
/// latitude = 48.8566
/// longitude = 2.3522
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub geolocation: GeolocationConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            geolocation: GeolocationConfig::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-widget")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the API key: runtime environment, then config file, then build environment.
    pub fn api_key(&self) -> Result<String> {
        let runtime = std::env::var(API_KEY_ENV).ok();
        resolve_api_key(runtime.as_deref(), self.api_key.as_deref(), BUILD_API_KEY)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn set_fixed_location(&mut self, coords: Coordinates) {
        self.geolocation.mode = GeolocationMode::Fixed;
        self.geolocation.latitude = Some(coords.latitude);
        self.geolocation.longitude = Some(coords.longitude);
    }
}

fn resolve_api_key(
    runtime: Option<&str>,
    file: Option<&str>,
    build: Option<&str>,
) -> Result<String> {
    [runtime, file, build]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: run `weather-widget configure` or set {API_KEY_ENV}."
            )
        })
}
