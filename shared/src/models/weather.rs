//! Weather observation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weather observation, normalized for analysis.
///
/// The wire format matches what the collector posts to the ingest endpoint
/// (`ts`, `windspeed`), so the same type is used for ingestion, listing and
/// the analyzer input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    pub city: String,
    #[serde(rename = "ts", alias = "timestamp")]
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub humidity: f64,
    #[serde(rename = "windspeed", alias = "windSpeed", alias = "wind_speed")]
    pub wind_speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        rename = "feels_like",
        alias = "feelsLike",
        skip_serializing_if = "Option::is_none"
    )]
    pub feels_like: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

impl WeatherSample {
    pub fn new(
        city: impl Into<String>,
        timestamp: DateTime<Utc>,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
    ) -> Self {
        Self {
            city: city.into(),
            timestamp,
            temperature,
            humidity,
            wind_speed,
            description: None,
            feels_like: None,
            pressure: None,
        }
    }

    /// Attach a provider condition text such as "clear sky"
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a provider-computed apparent temperature
    pub fn with_feels_like(mut self, feels_like: f64) -> Self {
        self.feels_like = Some(feels_like);
        self
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_collector_payload() {
        let json = r#"{
            "city": "Penápolis",
            "ts": "2025-01-15T15:00:00Z",
            "temperature": 31.4,
            "humidity": 48,
            "windspeed": 12.2
        }"#;

        let sample: WeatherSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.city, "Penápolis");
        assert_eq!(sample.humidity, 48.0);
        assert_eq!(sample.wind_speed, 12.2);
        assert!(sample.description.is_none());
        assert!(sample.feels_like.is_none());
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let json = r#"{
            "city": "Campinas",
            "timestamp": "2025-01-15T15:00:00-03:00",
            "temperature": 22.0,
            "humidity": 60,
            "windSpeed": 5,
            "feelsLike": 23.5,
            "description": "few clouds"
        }"#;

        let sample: WeatherSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.wind_speed, 5.0);
        assert_eq!(sample.feels_like, Some(23.5));
        assert_eq!(sample.timestamp.to_rfc3339(), "2025-01-15T18:00:00+00:00");
    }

    #[test]
    fn test_serialize_omits_absent_enrichments() {
        let ts = DateTime::parse_from_rfc3339("2025-01-15T15:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let sample = WeatherSample::new("Penápolis", ts, 30.0, 50.0, 3.0);
        let json = serde_json::to_value(sample).unwrap();

        assert_eq!(json["windspeed"], 3.0);
        assert!(json.get("description").is_none());
        assert!(json.get("pressure").is_none());
    }
}
