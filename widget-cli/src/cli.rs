use std::fmt;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Password, Select, Text};
use tracing::debug;
use widget_core::{
    Config, Coordinates, GeolocationMode, Widget, WidgetError,
    geolocation::geolocator_from_config, provider::provider_from_config, render,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Terminal weather widget")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and geolocation settings.
    Configure,

    /// Open the interactive widget at the current location.
    Run,

    /// Print the widget once and exit.
    Show {
        /// City to look up; without it the current location is used.
        #[arg(conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,

        /// Latitude, together with --lon.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude, together with --lat.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        debug!(command = ?self.command, "running");
        match self.command {
            Command::Configure => configure(),
            Command::Run => {
                let mut widget = build_widget()?;
                let alerts = widget.mount().await;
                show(&widget, &alerts);
                interactive(&mut widget).await
            }
            Command::Show { city, lat, lon } => {
                let mut widget = build_widget()?;
                let alerts = match (city, lat, lon) {
                    (Some(city), _, _) => widget.search(&city).await,
                    (None, Some(lat), Some(lon)) => {
                        widget.fetch_coordinates(Coordinates::new(lat, lon)).await
                    }
                    _ => widget.mount().await,
                };
                show(&widget, &alerts);
                Ok(())
            }
        }
    }
}

fn build_widget() -> anyhow::Result<Widget> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let geolocator = geolocator_from_config(&config.geolocation)?;
    Ok(Widget::new(provider, geolocator))
}

fn show(widget: &Widget, alerts: &[WidgetError]) {
    for alert in alerts {
        println!("! {alert}");
    }
    print!("{}", render(widget.state()));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Search,
    CurrentLocation,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItem::Search => "Search",
            MenuItem::CurrentLocation => "Current Location",
            MenuItem::Quit => "Quit",
        })
    }
}

fn menu_items(show_location_button: bool) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Search];
    if show_location_button {
        items.push(MenuItem::CurrentLocation);
    }
    items.push(MenuItem::Quit);
    items
}

/// `None` when the user cancels the prompt.
fn cancelled<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Prompt failed"),
    }
}

async fn interactive(widget: &mut Widget) -> anyhow::Result<()> {
    loop {
        let items = menu_items(render(widget.state()).show_location_button);
        let Some(choice) = cancelled(Select::new("Weather:", items).prompt())? else {
            return Ok(());
        };
        debug!(%choice, "menu");

        let alerts = match choice {
            MenuItem::Search => {
                let Some(input) = cancelled(Text::new("Search").prompt())? else {
                    continue;
                };
                widget.search(&input).await
            }
            MenuItem::CurrentLocation => widget.use_current_location().await,
            MenuItem::Quit => return Ok(()),
        };
        show(widget, &alerts);
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let Some(api_key) = cancelled(
        Password::new("OpenWeather API key:")
            .with_display_toggle_enabled()
            .without_confirmation()
            .prompt(),
    )?
    else {
        return Ok(());
    };
    if !api_key.trim().is_empty() {
        config.set_api_key(api_key.trim().to_string());
    }

    let Some(mode) = cancelled(
        Select::new("Device location:", GeolocationMode::all().to_vec()).prompt(),
    )?
    else {
        return Ok(());
    };

    match mode {
        GeolocationMode::Fixed => {
            let Some(latitude) = cancelled(CustomType::<f64>::new("Latitude:").prompt())? else {
                return Ok(());
            };
            let Some(longitude) = cancelled(CustomType::<f64>::new("Longitude:").prompt())?
            else {
                return Ok(());
            };
            config.set_fixed_location(Coordinates::new(latitude, longitude));
        }
        other => config.geolocation.mode = other,
    }

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "weather-widget",
            "show",
            "--lat",
            "-33.9",
            "--lon",
            "151.2",
        ])
        .unwrap();
        match cli.command {
            Command::Show { city, lat, lon } => {
                assert_eq!(city, None);
                assert_eq!(lat, Some(-33.9));
                assert_eq!(lon, Some(151.2));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn show_rejects_city_with_coordinates() {
        let res =
            Cli::try_parse_from(["weather-widget", "show", "Paris", "--lat", "1", "--lon", "2"]);
        assert!(res.is_err());
    }

    #[test]
    fn menu_labels_match_widget_controls() {
        let labels: Vec<String> = menu_items(true).iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Search", "Current Location", "Quit"]);
    }

    #[test]
    fn location_entry_only_when_offered() {
        assert_eq!(menu_items(false), [MenuItem::Search, MenuItem::Quit]);
        assert_eq!(
            menu_items(true),
            [MenuItem::Search, MenuItem::CurrentLocation, MenuItem::Quit]
        );
    }
}
