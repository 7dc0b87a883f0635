//! Configuration management for the GDASH weather backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with GDASH__ prefix

use std::net::{IpAddr, SocketAddr};

use chrono::FixedOffset;
use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::WeatherAnalyzer;

use crate::error::{AppError, AppResult};

/// Placeholder key shipped in sample env files
const OPENAI_PLACEHOLDER_KEY: &str = "sk-xxxx";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,

    /// Default admin account created on startup
    pub admin: AdminConfig,

    /// OpenAI-compatible text generation
    pub ai: AiConfig,

    pub analysis: AnalysisConfig,
    pub ingest: IngestConfig,

    /// Periodic Open-Meteo collector
    pub collector: CollectorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,

    /// Allowed CORS origins; empty allows any
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Listen address from `host` and `port`
    pub fn bind_addr(&self) -> AppResult<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| AppError::Configuration(format!("server.host {}: {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Secret key for signing JWT tokens
    pub secret: String,

    /// Access token expiration in seconds
    pub access_token_expiry: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AiConfig {
    pub openai_api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl AiConfig {
    /// A real key is present (not empty, not the sample placeholder)
    pub fn is_configured(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .is_some_and(|key| key.starts_with("sk-") && key != OPENAI_PLACEHOLDER_KEY)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Reference zone for hour-of-day rules
    pub utc_offset_hours: i32,

    /// Samples fed to the insights endpoint
    pub insight_batch_size: i64,

    /// Maximum rows for listing and export
    pub list_limit: i64,
}

impl AnalysisConfig {
    /// Analyzer pinned to the configured reference zone
    pub fn analyzer(&self) -> AppResult<WeatherAnalyzer> {
        WeatherAnalyzer::with_utc_offset_hours(self.utc_offset_hours).ok_or_else(|| {
            AppError::Configuration(format!(
                "Invalid analysis.utc_offset_hours: {}",
                self.utc_offset_hours
            ))
        })
    }

    pub fn reference_offset(&self) -> AppResult<FixedOffset> {
        Ok(self.analyzer()?.reference_offset())
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct IngestConfig {
    /// When set, POST /weather/logs requires an X-Signature header
    pub signing_secret: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CollectorConfig {
    pub enabled: bool,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub interval_minutes: u64,
    pub base_url: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("GDASH_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.cors_origins", Vec::<String>::new())?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("jwt.access_token_expiry", 3600)?
            .set_default("admin.name", "Admin")?
            .set_default("ai.model", "gpt-4o-mini")?
            .set_default("ai.base_url", "https://api.openai.com/v1")?
            .set_default("ai.timeout_secs", 60)?
            .set_default("analysis.utc_offset_hours", -3)?
            .set_default("analysis.insight_batch_size", 100)?
            .set_default("analysis.list_limit", 1000)?
            .set_default("collector.enabled", false)?
            .set_default("collector.city", "São Paulo")?
            .set_default("collector.latitude", -23.55)?
            .set_default("collector.longitude", -46.63)?
            .set_default("collector.interval_minutes", 30)?
            .set_default("collector.base_url", "https://api.open-meteo.com/v1/forecast")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (GDASH__ prefix)
            .add_source(
                Environment::with_prefix("GDASH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
        }
    }
}
