//! Weather service for storing and retrieving weather logs

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::WeatherSample;
use shared::validation::validate_sample;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the base64 HMAC-SHA256 of the raw ingest body
pub const SIGNATURE_HEADER: &str = "x-signature";

/// Ingest payload, same wire format as the analyzer sample
pub type CreateWeatherLogInput = WeatherSample;

/// Weather log record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeatherLog {
    pub id: Uuid,
    pub city: String,
    pub ts: DateTime<Utc>,
    pub temperature: f64,
    pub humidity: f64,
    pub windspeed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<WeatherLog> for WeatherSample {
    fn from(log: WeatherLog) -> Self {
        WeatherSample {
            city: log.city,
            timestamp: log.ts,
            temperature: log.temperature,
            humidity: log.humidity,
            wind_speed: log.windspeed,
            description: log.description,
            feels_like: log.feels_like,
            pressure: log.pressure,
        }
    }
}

/// Weather service for managing weather logs
#[derive(Clone)]
pub struct WeatherService {
    db: PgPool,
}

impl WeatherService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Validate and store one observation
    pub async fn create_log(&self, input: CreateWeatherLogInput) -> AppResult<WeatherLog> {
        validate_sample(&input).map_err(|msg| {
            AppError::validation("weather", msg, "Dados meteorológicos inválidos")
        })?;

        let log = sqlx::query_as::<_, WeatherLog>(
            r#"
            INSERT INTO weather_logs (
                city, ts, temperature, humidity, windspeed,
                description, feels_like, pressure
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, city, ts, temperature, humidity, windspeed,
                      description, feels_like, pressure, created_at
            "#,
        )
        .bind(input.city.trim())
        .bind(input.timestamp)
        .bind(input.temperature)
        .bind(input.humidity)
        .bind(input.wind_speed)
        .bind(&input.description)
        .bind(input.feels_like)
        .bind(input.pressure)
        .fetch_one(&self.db)
        .await?;

        tracing::debug!(id = %log.id, city = %log.city, "Weather log stored");
        Ok(log)
    }

    /// Newest-first listing
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<WeatherLog>> {
        let logs = sqlx::query_as::<_, WeatherLog>(
            r#"
            SELECT id, city, ts, temperature, humidity, windspeed,
                   description, feels_like, pressure, created_at
            FROM weather_logs
            ORDER BY ts DESC
            LIMIT $1
            "#,
        )
        .bind(limit.max(0))
        .fetch_all(&self.db)
        .await?;

        Ok(logs)
    }

    /// Newest-first samples ready for the analyzer
    pub async fn recent_samples(&self, limit: i64) -> AppResult<Vec<WeatherSample>> {
        Ok(self
            .list_recent(limit)
            .await?
            .into_iter()
            .map(WeatherSample::from)
            .collect())
    }
}

/// Check `signature` (base64) against the HMAC-SHA256 of `body`
pub fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = BASE64.decode(signature.trim()) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn sign_body(secret: &str, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        BASE64.encode(mac.finalize().into_bytes())
    }

    fn log() -> WeatherLog {
        WeatherLog {
            id: Uuid::new_v4(),
            city: "Penápolis".to_string(),
            ts: DateTime::parse_from_rfc3339("2025-01-15T15:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            temperature: 31.4,
            humidity: 48.0,
            windspeed: 12.2,
            description: Some("clear sky".to_string()),
            feels_like: None,
            pressure: Some(1013.0),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_log_into_sample_strips_storage_fields() {
        let sample = WeatherSample::from(log());
        assert_eq!(sample.city, "Penápolis");
        assert_eq!(sample.wind_speed, 12.2);
        assert_eq!(sample.description.as_deref(), Some("clear sky"));
        assert_eq!(sample.pressure, Some(1013.0));

        let json = serde_json::to_value(&sample).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_signature_round_trip() {
        let body = r#"{"city":"Penápolis","ts":"2025-01-15T15:00:00Z","temperature":30,"humidity":50,"windspeed":3}"#
            .as_bytes();
        let signature = sign_body("ingest-secret", body);

        assert!(verify_signature("ingest-secret", body, &signature));
        assert!(!verify_signature("other-secret", body, &signature));
        assert!(!verify_signature("ingest-secret", b"tampered", &signature));
    }

    #[test]
    fn test_signature_rejects_garbage() {
        assert!(!verify_signature("ingest-secret", b"{}", "not base64!"));
        assert!(!verify_signature("ingest-secret", b"{}", ""));
    }
}
