//! Insight response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::WeatherAnalysis;

/// Where the insight text came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightSource {
    OpenAi,
    Local,
}

/// Per-sector prose returned by the language model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectorInsights {
    #[serde(default)]
    pub agriculture: String,
    #[serde(default)]
    pub health: String,
    #[serde(default)]
    pub sports: String,
    #[serde(default)]
    pub energy: String,
    #[serde(default)]
    pub solar: String,
}

/// Payload of `GET /weather/insights`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub insights: String,
    pub analysis: Option<WeatherAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialized_insights: Option<SectorInsights>,
    pub generated_at: DateTime<Utc>,
    pub source: InsightSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}
