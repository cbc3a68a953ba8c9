use crate::{
    Config,
    error::{ForecastError, GeocodeError},
    model::{Coordinates, CurrentConditions},
    provider::open_meteo::{OpenMeteoForecast, OpenMeteoGeocoder},
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

pub mod open_meteo;

/// Resolves a place name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, place: &str) -> Result<Coordinates, GeocodeError>;
}

/// Fetches current conditions at a point.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_current(&self, at: Coordinates) -> Result<CurrentConditions, ForecastError>;
}

/// Build the shared HTTP client. No timeout is set unless configured.
pub fn http_client(config: &Config) -> anyhow::Result<Client> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build().context("Failed to build HTTP client")
}

/// Construct both Open-Meteo clients from config, sharing one connection pool.
pub fn open_meteo_from_config(
    config: &Config,
) -> anyhow::Result<(OpenMeteoGeocoder, OpenMeteoForecast)> {
    let http = http_client(config)?;

    let geocoder = OpenMeteoGeocoder::new(
        http.clone(),
        config.geocoding_url.clone(),
        config.language.clone(),
    );
    let forecast = OpenMeteoForecast::new(http, config.forecast_url.clone());

    Ok((geocoder, forecast))
}
