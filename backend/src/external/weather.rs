//! Weather API client for fetching current conditions
//!
//! Integrates with the Open-Meteo forecast API, which needs no API key

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use shared::models::WeatherSample;
use shared::types::GpsCoordinates;

/// Open-Meteo API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

/// Open-Meteo forecast response (only the fields we read)
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current_weather: OpenMeteoCurrent,
    hourly: Option<OpenMeteoHourly>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoCurrent {
    temperature: f64,
    windspeed: f64,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoHourly {
    #[serde(default)]
    relativehumidity_2m: Vec<Option<f64>>,
}

impl WeatherClient {
    /// Create a new WeatherClient against `base_url` (the `/v1/forecast` endpoint)
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch current conditions for `city` at `coords`, stamped with now
    pub async fn get_current_weather(
        &self,
        city: &str,
        coords: GpsCoordinates,
    ) -> AppResult<WeatherSample> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("hourly", "relativehumidity_2m".to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OpenMeteoResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })?;

        convert_response(city, data)
    }
}

fn convert_response(city: &str, data: OpenMeteoResponse) -> AppResult<WeatherSample> {
    // Open-Meteo has no current humidity, the first hourly slot stands in
    let humidity = data
        .hourly
        .and_then(|h| h.relativehumidity_2m.into_iter().next().flatten())
        .ok_or_else(|| {
            AppError::ExternalService("Weather response has no relative humidity".to_string())
        })?;

    Ok(WeatherSample::new(
        city,
        Utc::now(),
        data.current_weather.temperature,
        humidity,
        data.current_weather.windspeed,
    ))
}
