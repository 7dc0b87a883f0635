//! WebAssembly module for the GDASH weather dashboard
//!
//! Runs the same analyzer as the backend in the browser:
//! - Full analysis of a batch of samples
//! - Local insight text
//! - Feels-like, comfort and trend helpers for live widgets

use shared::analysis;
use shared::models::WeatherSample;
use shared::WeatherAnalyzer;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Analyze a newest-first JSON array of samples.
///
/// Returns the analysis object, or `null` for an empty array.
#[wasm_bindgen]
pub fn analyze_weather(samples_json: &str, utc_offset_hours: i32) -> Result<JsValue, JsValue> {
    match analysis_json(samples_json, utc_offset_hours).map_err(|e| JsValue::from_str(&e))? {
        Some(json) => js_sys::JSON::parse(&json),
        None => Ok(JsValue::NULL),
    }
}

/// Markdown insights rendered locally, without any model call
#[wasm_bindgen]
pub fn render_insights(samples_json: &str, utc_offset_hours: i32) -> Result<String, JsValue> {
    insights_text(samples_json, utc_offset_hours).map_err(|e| JsValue::from_str(&e))
}

/// Apparent temperature in °C
#[wasm_bindgen]
pub fn calculate_feels_like(temperature: f64, humidity: f64, wind_speed: f64) -> f64 {
    analysis::calculate_feels_like(temperature, humidity, wind_speed)
}

/// Comfort score, 0-100
#[wasm_bindgen]
pub fn comfort_score(temperature: f64, humidity: f64, wind_speed: f64) -> u8 {
    analysis::comfort_score(temperature, humidity, wind_speed).score
}

/// Comfort label such as "Excelente" or "Ruim"
#[wasm_bindgen]
pub fn comfort_level(temperature: f64, humidity: f64, wind_speed: f64) -> String {
    analysis::comfort_score(temperature, humidity, wind_speed)
        .level
        .to_string()
}

/// Trend label (subindo / estável / caindo) of newest-first values
#[wasm_bindgen]
pub fn detect_temperature_trend(values: &[f64]) -> String {
    analysis::detect_trend(values).to_string()
}

/// Validate one sample before posting it; returns the error message or `undefined`
#[wasm_bindgen]
pub fn validate_weather_sample(sample_json: &str) -> Option<String> {
    match serde_json::from_str::<WeatherSample>(sample_json) {
        Ok(sample) => shared::validation::validate_sample(&sample)
            .err()
            .map(str::to_string),
        Err(e) => Some(format!("Invalid sample JSON: {}", e)),
    }
}

fn parse_samples(samples_json: &str) -> Result<Vec<WeatherSample>, String> {
    serde_json::from_str(samples_json).map_err(|e| format!("Invalid samples JSON: {}", e))
}

fn analyzer(utc_offset_hours: i32) -> Result<WeatherAnalyzer, String> {
    WeatherAnalyzer::with_utc_offset_hours(utc_offset_hours)
        .ok_or_else(|| format!("Invalid UTC offset: {}", utc_offset_hours))
}

fn analysis_json(samples_json: &str, utc_offset_hours: i32) -> Result<Option<String>, String> {
    let samples = parse_samples(samples_json)?;
    analyzer(utc_offset_hours)?
        .analyze(&samples)
        .map(|analysis| serde_json::to_string(&analysis).map_err(|e| e.to_string()))
        .transpose()
}

fn insights_text(samples_json: &str, utc_offset_hours: i32) -> Result<String, String> {
    let samples = parse_samples(samples_json)?;
    let analysis = analyzer(utc_offset_hours)?.analyze(&samples);
    Ok(analysis::render_local_insights(&samples, analysis.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &str = r#"[
        {"city": "Penápolis", "ts": "2025-01-15T15:00:00Z", "temperature": 25, "humidity": 55, "windspeed": 8},
        {"city": "Penápolis", "ts": "2025-01-15T14:00:00Z", "temperature": 24, "humidity": 57, "windspeed": 7}
    ]"#;

    #[test]
    fn test_analysis_json_uses_camel_case() {
        let json = analysis_json(SAMPLES, -3).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["comfortScore"].is_u64());
        assert_eq!(value["isNight"], false);
        assert!(value["stats"]["avgTemp"].is_f64());
    }

    #[test]
    fn test_empty_batch_has_no_analysis() {
        assert_eq!(analysis_json("[]", -3).unwrap(), None);
        assert_eq!(
            insights_text("[]", -3).unwrap(),
            analysis::AWAITING_DATA_MESSAGE
        );
    }

    #[test]
    fn test_bad_input_is_reported() {
        assert!(analysis_json("not json", -3).is_err());
        assert!(analysis_json(SAMPLES, 30).is_err());
    }

    #[test]
    fn test_insights_mention_city() {
        assert!(insights_text(SAMPLES, -3).unwrap().contains("Penápolis"));
    }

    #[test]
    fn test_scalar_helpers_match_analyzer() {
        assert_eq!(calculate_feels_like(25.0, 55.0, 8.0), 25.0);
        assert_eq!(
            comfort_score(25.0, 55.0, 8.0),
            analysis::comfort_score(25.0, 55.0, 8.0).score
        );
        assert_eq!(detect_temperature_trend(&[30.0, 28.0, 26.0, 24.0, 22.0]), "subindo");
        assert_eq!(detect_temperature_trend(&[25.0]), "estável");
    }

    #[test]
    fn test_validate_weather_sample() {
        assert_eq!(
            validate_weather_sample(
                r#"{"city": "Penápolis", "ts": "2025-01-15T15:00:00Z", "temperature": 25, "humidity": 150, "windspeed": 8}"#
            )
            .as_deref(),
            Some("Humidity must be between 0 and 100%")
        );
        assert!(validate_weather_sample(
            r#"{"city": "Penápolis", "ts": "2025-01-15T15:00:00Z", "temperature": 25, "humidity": 50, "windspeed": 8}"#
        )
        .is_none());
    }
}
