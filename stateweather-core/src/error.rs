use std::path::PathBuf;
use thiserror::Error;

/// Transport-level failure talking to either Open-Meteo service.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("no location found for '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("response has no current weather section")]
    Unavailable,

    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Coarse category of a failed lookup, for titling user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Location,
    Weather,
    Network,
}

impl ErrorKind {
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::Input => "Input Error",
            ErrorKind::Location => "Location Error",
            ErrorKind::Weather => "Weather Error",
            ErrorKind::Network => "Network Error",
        }
    }
}

/// Why a lookup stopped. None of these leave a history record behind.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Please enter a State name.")]
    EmptyInput,

    #[error("Only Indian States are supported!\n\nValid options:\n{}", .valid.join(", "))]
    UnsupportedState {
        input: String,
        valid: Vec<&'static str>,
    },

    #[error("Could not fetch location data for {capital}: {source}")]
    Location {
        capital: String,
        #[source]
        source: GeocodeError,
    },

    #[error("Weather data not available for {capital}: {source}")]
    Weather {
        capital: String,
        #[source]
        source: ForecastError,
    },
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::EmptyInput | LookupError::UnsupportedState { .. } => ErrorKind::Input,
            LookupError::Location { source: GeocodeError::NotFound(_), .. } => ErrorKind::Location,
            LookupError::Weather { source: ForecastError::Unavailable, .. } => ErrorKind::Weather,
            LookupError::Location { source: GeocodeError::Network(_), .. }
            | LookupError::Weather { source: ForecastError::Network(_), .. } => ErrorKind::Network,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Please select a row to delete.")]
    NoSelection,

    #[error("row {index} does not exist (history has {len} rows)")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot open {} for writing: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write history rows: {0}")]
    Csv(#[from] csv::Error),
}
