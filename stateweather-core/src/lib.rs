//! Core library for the `stateweather` CLI.
//!
//! This crate defines:
//! - Reference tables (state capitals, weather code labels)
//! - Open-Meteo geocoding and forecast clients behind small traits
//! - The lookup pipeline and the in-memory session history
//! - CSV export and on-disk configuration
//!
//! It is used by `stateweather-cli`, but can also drive other front ends.

pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod reference;

pub use config::Config;
pub use error::{
    ErrorKind, ExportError, ForecastError, GeocodeError, HistoryError, LookupError, NetworkError,
};
pub use history::HistoryStore;
pub use model::{Coordinates, CurrentConditions, DisplayResult, HistoryRecord};
pub use pipeline::Session;
pub use provider::{Geocoder, WeatherSource, open_meteo_from_config};
