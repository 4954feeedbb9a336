use reqwest::Url;

use crate::model::QuerySource;

/// Path of the provider's current weather endpoint.
pub const CURRENT_WEATHER_PATH: &str = "data/2.5/weather";

/// Build the current weather URL for `source` against `endpoint`.
///
/// `endpoint` is the full current weather URL without query parameters.
pub fn current_weather_url(endpoint: &Url, source: &QuerySource, api_key: &str) -> Url {
    let mut url = endpoint.clone();
    {
        let mut query = url.query_pairs_mut();
        match source {
            QuerySource::Coordinates(coords) => {
                query
                    .append_pair("lat", &coords.latitude.to_string())
                    .append_pair("lon", &coords.longitude.to_string());
            }
            QuerySource::City(city) => {
                query.append_pair("q", city);
            }
        }
        query.append_pair("units", "metric").append_pair("appid", api_key);
    }
    url
}
