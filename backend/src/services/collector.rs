//! Periodic weather collector
//!
//! Polls Open-Meteo for the configured city and stores each reading through
//! the regular ingestion path.

use std::time::Duration;

use sqlx::PgPool;
use tokio::task::JoinHandle;

use crate::config::CollectorConfig;
use crate::error::AppResult;
use crate::external::WeatherClient;
use crate::services::weather::WeatherService;
use shared::types::GpsCoordinates;

/// Polling period, never below one minute
pub fn collector_interval(interval_minutes: u64) -> Duration {
    Duration::from_secs(interval_minutes.max(1) * 60)
}

/// Spawn the collector loop. Runs once immediately, then on every tick.
pub fn spawn_collector(db: PgPool, config: CollectorConfig) -> AppResult<JoinHandle<()>> {
    let client = WeatherClient::new(config.base_url.clone())?;
    let service = WeatherService::new(db);
    let coords = GpsCoordinates::new(config.latitude, config.longitude);
    let interval = collector_interval(config.interval_minutes);

    tracing::info!(
        city = %config.city,
        interval_secs = interval.as_secs(),
        "Starting weather collector"
    );

    Ok(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;

            let sample = match client.get_current_weather(&config.city, coords).await {
                Ok(sample) => sample,
                Err(e) => {
                    tracing::warn!(error = %e, city = %config.city, "Weather collection failed");
                    continue;
                }
            };

            match service.create_log(sample).await {
                Ok(log) => tracing::info!(
                    city = %log.city,
                    temperature = log.temperature,
                    humidity = log.humidity,
                    "Weather reading collected"
                ),
                Err(e) => tracing::warn!(error = %e, "Failed to store collected reading"),
            }
        }
    }))
}
