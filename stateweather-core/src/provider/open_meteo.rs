use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::{ForecastError, GeocodeError, NetworkError},
    model::{Coordinates, CurrentConditions},
};

use super::{Geocoder, WeatherSource};

/// Place-name search against the Open-Meteo geocoding API.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    http: Client,
    base_url: String,
    language: String,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client, base_url: String, language: String) -> Self {
        Self { http, base_url, language }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Current conditions from the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    http: Client,
    base_url: String,
}

impl OpenMeteoForecast {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Deserialize)]
struct OmGeoResult {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct OmGeoResponse {
    #[serde(default)]
    results: Option<Vec<OmGeoResult>>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
    time: String,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    #[serde(default)]
    current_weather: Option<OmCurrentWeather>,
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, place: &str) -> Result<Coordinates, GeocodeError> {
        tracing::debug!(place, url = %self.base_url, "geocoding");

        let parsed: OmGeoResponse = get_json(
            &self.http,
            &self.base_url,
            &[
                ("name", place),
                ("count", "1"),
                ("language", self.language.as_str()),
                ("format", "json"),
            ],
        )
        .await?;

        let first = parsed
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| GeocodeError::NotFound(place.to_string()))?;

        Ok(Coordinates { latitude: first.latitude, longitude: first.longitude })
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoForecast {
    async fn fetch_current(&self, at: Coordinates) -> Result<CurrentConditions, ForecastError> {
        tracing::debug!(
            latitude = at.latitude,
            longitude = at.longitude,
            url = %self.base_url,
            "fetching current weather"
        );

        let latitude = at.latitude.to_string();
        let longitude = at.longitude.to_string();

        let parsed: OmForecastResponse = get_json(
            &self.http,
            &self.base_url,
            &[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current_weather", "true"),
            ],
        )
        .await?;

        let current = parsed.current_weather.ok_or(ForecastError::Unavailable)?;

        Ok(CurrentConditions {
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
            weather_code: current.weathercode,
            time: current.time,
        })
    }
}

/// Single GET, no retry. Query values are percent-encoded by reqwest.
async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, NetworkError> {
    let res = http.get(url).query(query).send().await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(NetworkError::Status {
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
