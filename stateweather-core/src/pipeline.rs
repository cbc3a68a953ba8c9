//! The lookup pipeline and the session context that owns the history.
//!
//! A lookup runs strictly in order: trim and validate the state name,
//! resolve its capital, geocode the capital, fetch current weather, label
//! the weather code, and finally append one history record. Any failure
//! stops the run before the history is touched.

use std::path::Path;

use crate::{
    error::{ExportError, HistoryError, LookupError},
    export,
    history::HistoryStore,
    model::{DisplayResult, HistoryRecord},
    provider::{Geocoder, WeatherSource},
    reference,
};

/// Application context passed to every shell action.
#[derive(Debug)]
pub struct Session<G, W> {
    geocoder: G,
    weather: W,
    history: HistoryStore,
}

impl<G: Geocoder, W: WeatherSource> Session<G, W> {
    pub fn new(geocoder: G, weather: W) -> Self {
        Self { geocoder, weather, history: HistoryStore::new() }
    }

    pub async fn lookup(&mut self, raw_input: &str) -> Result<DisplayResult, LookupError> {
        let state = raw_input.trim();
        if state.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        let capital = reference::capital_of(state).ok_or_else(|| {
            LookupError::UnsupportedState {
                input: state.to_string(),
                valid: reference::state_names(),
            }
        })?;

        let coordinates = self.geocoder.resolve(capital).await.map_err(|source| {
            tracing::warn!(capital, error = %source, "geocoding failed");
            LookupError::Location { capital: capital.to_string(), source }
        })?;

        let current = self.weather.fetch_current(coordinates).await.map_err(|source| {
            tracing::warn!(capital, error = %source, "weather fetch failed");
            LookupError::Weather { capital: capital.to_string(), source }
        })?;

        let result = DisplayResult {
            label: reference::label_for(current.weather_code),
            state: state.to_string(),
            capital: capital.to_string(),
            temperature_c: current.temperature_c,
            wind_speed_kmh: current.wind_speed_kmh,
            time: current.time,
        };

        self.history.append(result.to_record());
        tracing::info!(state, capital, code = current.weather_code, "lookup recorded");

        Ok(result)
    }

    pub fn history(&self) -> &[HistoryRecord] {
        self.history.all()
    }

    pub fn delete(&mut self, positions: &[usize]) -> Result<usize, HistoryError> {
        self.history.remove_at(positions)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn export_history(&self, path: &Path) -> Result<(), ExportError> {
        export::export(self.history.all(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{ErrorKind, ForecastError, GeocodeError, NetworkError},
        model::{Coordinates, CurrentConditions},
    };
    use async_trait::async_trait;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Debug, Clone, Default)]
    struct FakeGeocoder {
        calls: Arc<AtomicUsize>,
        missing: bool,
    }

    #[async_trait]
    impl Geocoder for FakeGeocoder {
        async fn resolve(&self, place: &str) -> Result<Coordinates, GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.missing {
                return Err(GeocodeError::NotFound(place.to_string()));
            }
            Ok(Coordinates { latitude: 8.5, longitude: 76.9 })
        }
    }

    #[derive(Debug, Clone)]
    struct FakeWeather {
        calls: Arc<AtomicUsize>,
        outcome: Outcome,
    }

    #[derive(Debug, Clone, Copy)]
    enum Outcome {
        Code(i32),
        Unavailable,
        BadGateway,
    }

    impl FakeWeather {
        fn with(outcome: Outcome) -> Self {
            Self { calls: Arc::default(), outcome }
        }
    }

    #[async_trait]
    impl WeatherSource for FakeWeather {
        async fn fetch_current(&self, _at: Coordinates) -> Result<CurrentConditions, ForecastError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Outcome::Code(code) => Ok(CurrentConditions {
                    temperature_c: 29.0,
                    wind_speed_kmh: 11.5,
                    weather_code: code,
                    time: "2024-06-01T12:00".into(),
                }),
                Outcome::Unavailable => Err(ForecastError::Unavailable),
                Outcome::BadGateway => Err(ForecastError::Network(NetworkError::Status {
                    status: 502,
                    body: String::new(),
                })),
            }
        }
    }

    type Fixture = (Session<FakeGeocoder, FakeWeather>, Arc<AtomicUsize>, Arc<AtomicUsize>);

    fn fixture(outcome: Outcome) -> Fixture {
        let geocoder = FakeGeocoder::default();
        let weather = FakeWeather::with(outcome);
        let (g, w) = (geocoder.calls.clone(), weather.calls.clone());
        (Session::new(geocoder, weather), g, w)
    }

    #[tokio::test]
    async fn kerala_partly_cloudy_is_recorded() {
        let (mut session, _, _) = fixture(Outcome::Code(2));

        let result = session.lookup("  Kerala ").await.expect("lookup succeeds");
        assert_eq!(result.label, "⛅ Partly Cloudy");
        assert_eq!(result.state, "Kerala");
        assert_eq!(result.capital, "Thiruvananthapuram");
        assert_eq!(result.wind_speed_kmh, 11.5);

        assert_eq!(
            session.history(),
            [HistoryRecord {
                state: "Kerala".into(),
                capital: "Thiruvananthapuram".into(),
                temperature: "29.0 °C".into(),
                condition: "⛅ Partly Cloudy".into(),
                time: "2024-06-01T12:00".into(),
            }]
        );
    }

    #[tokio::test]
    async fn invalid_input_makes_no_network_calls() {
        let (mut session, geo_calls, weather_calls) = fixture(Outcome::Code(0));

        for input in ["", "   ", "kerala", "California", "Kerala State"] {
            let err = session.lookup(input).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Input, "input {input:?}");
        }

        assert!(matches!(session.lookup("").await, Err(LookupError::EmptyInput)));
        match session.lookup("Atlantis").await {
            Err(LookupError::UnsupportedState { input, valid }) => {
                assert_eq!(input, "Atlantis");
                assert_eq!(valid.len(), 31);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert_eq!(geo_calls.load(Ordering::SeqCst), 0);
        assert_eq!(weather_calls.load(Ordering::SeqCst), 0);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn geocode_miss_stops_before_weather() {
        let geocoder = FakeGeocoder { missing: true, ..FakeGeocoder::default() };
        let weather = FakeWeather::with(Outcome::Code(0));
        let weather_calls = weather.calls.clone();
        let mut session = Session::new(geocoder, weather);

        let err = session.lookup("Goa").await.unwrap_err();
        assert!(matches!(err, LookupError::Location { ref capital, .. } if capital == "Panaji"));
        assert_eq!(err.kind(), ErrorKind::Location);
        assert_eq!(weather_calls.load(Ordering::SeqCst), 0);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn weather_failures_record_nothing() {
        let (mut session, _, _) = fixture(Outcome::Unavailable);
        let err = session.lookup("Goa").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Weather);
        assert!(session.history().is_empty());

        let (mut session, _, _) = fixture(Outcome::BadGateway);
        let err = session.lookup("Goa").await.unwrap_err();
        assert!(matches!(err, LookupError::Weather { .. }));
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn unknown_code_still_records() {
        let (mut session, _, _) = fixture(Outcome::Code(999));
        let result = session.lookup("Ladakh").await.expect("lookup succeeds");

        assert_eq!(result.label, reference::UNKNOWN_LABEL);
        assert_eq!(session.history()[0].condition, reference::UNKNOWN_LABEL);
    }

    #[tokio::test]
    async fn repeated_lookups_append_in_order() {
        let (mut session, geo_calls, _) = fixture(Outcome::Code(1));

        for state in ["Kerala", "Goa", "Kerala"] {
            session.lookup(state).await.expect("lookup succeeds");
        }

        let states: Vec<&str> = session.history().iter().map(|r| r.state.as_str()).collect();
        assert_eq!(states, ["Kerala", "Goa", "Kerala"]);
        // no caching between lookups
        assert_eq!(geo_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn delete_and_clear_through_session() {
        let (mut session, _, _) = fixture(Outcome::Code(3));
        for state in ["Assam", "Bihar", "Goa"] {
            session.lookup(state).await.expect("lookup succeeds");
        }

        assert_eq!(session.delete(&[]), Err(HistoryError::NoSelection));
        assert_eq!(session.history().len(), 3);

        assert_eq!(session.delete(&[1]), Ok(1));
        let states: Vec<&str> = session.history().iter().map(|r| r.state.as_str()).collect();
        assert_eq!(states, ["Assam", "Goa"]);

        session.clear_history();
        assert!(session.history().is_empty());
    }
}
