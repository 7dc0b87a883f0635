//! Derived weather analysis models
//!
//! These are transient value objects rebuilt on every analyzer call. Field
//! names serialize in camelCase because the dashboard consumes them as-is.

use serde::{Deserialize, Serialize};

use super::sector::SpecializedAnalysis;

/// Full output of the weather analyzer for one batch of samples
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAnalysis {
    pub comfort_score: u8,
    pub comfort_level: ComfortLevel,
    pub comfort_emoji: &'static str,
    pub day_classification: DayClassification,
    pub day_emoji: &'static str,
    pub temp_trend: Trend,
    pub humidity_trend: Trend,
    pub trend_emoji: &'static str,
    pub stats: WeatherStats,
    pub feels_like: f64,
    pub uv_index: UvIndex,
    pub alerts: Vec<WeatherAlert>,
    pub recommendations: Vec<&'static str>,
    pub narrative: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialized: Option<SpecializedAnalysis>,
    pub is_night: bool,
}

/// Aggregate statistics over the whole batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherStats {
    pub avg_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub avg_humidity: f64,
    pub max_humidity: f64,
    pub min_humidity: f64,
    pub avg_wind: f64,
    pub max_wind: f64,
    pub temp_variation: f64,
}

/// A threshold alert raised from the latest sample or the batch stats
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeatherAlert {
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub title: &'static str,
    pub message: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Danger,
    Warning,
    Info,
    Success,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AlertSeverity::Danger => "danger",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Info => "info",
            AlertSeverity::Success => "success",
        };
        write!(f, "{}", s)
    }
}

/// Five-tier comfort label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ComfortLevel {
    #[serde(rename = "Excelente")]
    Excellent,
    #[serde(rename = "Bom")]
    Good,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Desconfortável")]
    Uncomfortable,
    #[serde(rename = "Ruim")]
    Poor,
}

impl ComfortLevel {
    /// Map a 0-100 comfort score to its tier
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ComfortLevel::Excellent
        } else if score >= 70.0 {
            ComfortLevel::Good
        } else if score >= 55.0 {
            ComfortLevel::Moderate
        } else if score >= 40.0 {
            ComfortLevel::Uncomfortable
        } else {
            ComfortLevel::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComfortLevel::Excellent => "Excelente",
            ComfortLevel::Good => "Bom",
            ComfortLevel::Moderate => "Moderado",
            ComfortLevel::Uncomfortable => "Desconfortável",
            ComfortLevel::Poor => "Ruim",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ComfortLevel::Excellent => "😊",
            ComfortLevel::Good => "🙂",
            ComfortLevel::Moderate => "😐",
            ComfortLevel::Uncomfortable => "😕",
            ComfortLevel::Poor => "😫",
        }
    }
}

impl std::fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Categorical label for the current conditions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DayClassification {
    #[serde(rename = "Tempestuoso")]
    Stormy,
    #[serde(rename = "Chuvoso")]
    Rainy,
    #[serde(rename = "Nevando")]
    Snowy,
    #[serde(rename = "Nevoeiro")]
    Foggy,
    #[serde(rename = "Parcialmente Nublado")]
    PartlyCloudy,
    #[serde(rename = "Noite com Nuvens")]
    CloudyNight,
    #[serde(rename = "Nublado")]
    Cloudy,
    #[serde(rename = "Ensolarado")]
    Sunny,
    #[serde(rename = "Noite Clara")]
    ClearNight,
    #[serde(rename = "Muito Quente")]
    VeryHot,
    #[serde(rename = "Quente")]
    Hot,
    #[serde(rename = "Noite Quente")]
    WarmNight,
    #[serde(rename = "Frio")]
    Cold,
    #[serde(rename = "Fresco")]
    Cool,
    #[serde(rename = "Ventoso")]
    Windy,
    #[serde(rename = "Agradável")]
    Pleasant,
    #[serde(rename = "Noite Agradável")]
    PleasantNight,
}

impl DayClassification {
    pub fn label(&self) -> &'static str {
        match self {
            DayClassification::Stormy => "Tempestuoso",
            DayClassification::Rainy => "Chuvoso",
            DayClassification::Snowy => "Nevando",
            DayClassification::Foggy => "Nevoeiro",
            DayClassification::PartlyCloudy => "Parcialmente Nublado",
            DayClassification::CloudyNight => "Noite com Nuvens",
            DayClassification::Cloudy => "Nublado",
            DayClassification::Sunny => "Ensolarado",
            DayClassification::ClearNight => "Noite Clara",
            DayClassification::VeryHot => "Muito Quente",
            DayClassification::Hot => "Quente",
            DayClassification::WarmNight => "Noite Quente",
            DayClassification::Cold => "Frio",
            DayClassification::Cool => "Fresco",
            DayClassification::Windy => "Ventoso",
            DayClassification::Pleasant => "Agradável",
            DayClassification::PleasantNight => "Noite Agradável",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            DayClassification::Stormy => "⛈️",
            DayClassification::Rainy => "🌧️",
            DayClassification::Snowy => "🌨️",
            DayClassification::Foggy => "🌫️",
            DayClassification::PartlyCloudy => "⛅",
            DayClassification::CloudyNight | DayClassification::Cloudy => "☁️",
            DayClassification::Sunny | DayClassification::Hot => "☀️",
            DayClassification::ClearNight
            | DayClassification::WarmNight
            | DayClassification::PleasantNight => "🌙",
            DayClassification::VeryHot => "🔥",
            DayClassification::Cold => "❄️",
            DayClassification::Cool => "🌬️",
            DayClassification::Windy => "💨",
            DayClassification::Pleasant => "🌤️",
        }
    }
}

impl std::fmt::Display for DayClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Short-window direction of a metric series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Trend {
    #[serde(rename = "subindo")]
    Rising,
    #[serde(rename = "estável")]
    Stable,
    #[serde(rename = "caindo")]
    Falling,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Rising => "subindo",
            Trend::Stable => "estável",
            Trend::Falling => "caindo",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Trend::Rising => "📈",
            Trend::Stable => "➡️",
            Trend::Falling => "📉",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Estimated UV band, ordered from none to extreme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UvIndex {
    #[serde(rename = "Nulo (0)")]
    None,
    #[serde(rename = "Baixo (1-2)")]
    Low,
    #[serde(rename = "Moderado (3-5)")]
    Moderate,
    #[serde(rename = "Alto (6-7)")]
    High,
    #[serde(rename = "Muito Alto (8-10)")]
    VeryHigh,
    #[serde(rename = "Extremo (11+)")]
    Extreme,
}

impl UvIndex {
    pub fn label(&self) -> &'static str {
        match self {
            UvIndex::None => "Nulo (0)",
            UvIndex::Low => "Baixo (1-2)",
            UvIndex::Moderate => "Moderado (3-5)",
            UvIndex::High => "Alto (6-7)",
            UvIndex::VeryHigh => "Muito Alto (8-10)",
            UvIndex::Extreme => "Extremo (11+)",
        }
    }
}

impl std::fmt::Display for UvIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
