use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Snapshot of the forecast service's `current_weather` section.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32,
    /// Observation time as reported, e.g. `2024-06-01T12:00`.
    pub time: String,
}

/// One row of the session history. Field names double as the export header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Capital")]
    pub capital: String,
    #[serde(rename = "Temperature")]
    pub temperature: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Time")]
    pub time: String,
}

/// Everything the shell shows after a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayResult {
    pub label: &'static str,
    pub state: String,
    pub capital: String,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub time: String,
}

impl DisplayResult {
    pub fn to_record(&self) -> HistoryRecord {
        HistoryRecord {
            state: self.state.clone(),
            capital: self.capital.clone(),
            temperature: format_celsius(self.temperature_c),
            condition: self.label.to_string(),
            time: self.time.clone(),
        }
    }
}

impl fmt::Display for DisplayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f)?;
        writeln!(f, "📍 {} (Capital: {})", self.state, self.capital)?;
        writeln!(f, "🌡 Temp: {}", format_celsius(self.temperature_c))?;
        writeln!(f, "💨 Wind Speed: {} km/h", format_decimal(self.wind_speed_kmh))?;
        write!(f, "⏰ Time: {}", self.time)
    }
}

/// `28` → `"28.0 °C"`, `28.5` → `"28.5 °C"`.
pub fn format_celsius(value: f64) -> String {
    format!("{} °C", format_decimal(value))
}

fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
