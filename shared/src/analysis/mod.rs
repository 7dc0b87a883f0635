//! Weather analysis engine
//!
//! Pure derivation from a newest-first batch of [`WeatherSample`] values to a
//! [`WeatherAnalysis`]. No I/O happens here; the only environmental input,
//! the local time zone used for hour-of-day rules, is injected through
//! [`WeatherAnalyzer`].

mod alerts;
mod classification;
mod comfort;
mod format;
mod insights;
mod narrative;
mod solar;
mod specialized;
mod stats;
mod trend;

pub use alerts::{generate_alerts, generate_recommendations, is_pleasant, MAX_RECOMMENDATIONS};
pub use classification::{classify_day, estimate_uv_index, is_night_hour};
pub use comfort::{calculate_feels_like, comfort_score, ComfortScore};
pub use format::{fixed, round_half_up, Fixed};
pub use insights::{render_local_insights, AWAITING_DATA_MESSAGE};
pub use narrative::{generate_narrative, greeting};
pub use solar::{daily_forecast, peak_hours, solar_analysis};
pub use specialized::{
    agriculture_analysis, agriculture_score, energy_analysis, health_analysis,
    specialized_analysis, sports_analysis,
};
pub use stats::compute_stats;
pub use trend::{detect_trend, regression_slope, TREND_SLOPE_THRESHOLD, TREND_WINDOW};

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};

use crate::models::{WeatherAnalysis, WeatherSample};

/// Dashboard reference zone, Brasília time
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -3;

/// Derives [`WeatherAnalysis`] values in a fixed reference time zone
#[derive(Debug, Clone, Copy)]
pub struct WeatherAnalyzer {
    reference_offset: FixedOffset,
    include_specialized: bool,
}

impl Default for WeatherAnalyzer {
    fn default() -> Self {
        Self::with_utc_offset_hours(DEFAULT_UTC_OFFSET_HOURS)
            .unwrap_or_else(|| Self::new(Utc.fix()))
    }
}

impl WeatherAnalyzer {
    pub fn new(reference_offset: FixedOffset) -> Self {
        Self {
            reference_offset,
            include_specialized: true,
        }
    }

    /// `None` when the offset is outside ±23 hours
    pub fn with_utc_offset_hours(hours: i32) -> Option<Self> {
        if hours.abs() >= 24 {
            return None;
        }
        FixedOffset::east_opt(hours * 3600).map(Self::new)
    }

    /// Toggle the nested sector analyses
    pub fn with_specialized(mut self, include: bool) -> Self {
        self.include_specialized = include;
        self
    }

    pub fn reference_offset(&self) -> FixedOffset {
        self.reference_offset
    }

    /// Instant expressed in the reference zone
    pub fn local_time(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.reference_offset)
    }

    /// Hour of day (0-23) in the reference zone
    pub fn local_hour(&self, instant: DateTime<Utc>) -> u32 {
        self.local_time(instant).hour()
    }

    /// Analyze a newest-first batch.
    ///
    /// Returns `None` for an empty batch. Index 0 is treated as the latest
    /// sample whatever its timestamp; ordering is the caller's contract.
    pub fn analyze(&self, samples: &[WeatherSample]) -> Option<WeatherAnalysis> {
        let latest = samples.first()?;
        let stats = compute_stats(samples)?;

        let hour = self.local_hour(latest.timestamp);
        let is_night = is_night_hour(hour);

        let feels_like = latest.feels_like.unwrap_or_else(|| {
            calculate_feels_like(latest.temperature, latest.humidity, latest.wind_speed)
        });
        let comfort = comfort_score(latest.temperature, latest.humidity, latest.wind_speed);

        let temperatures: Vec<f64> = samples.iter().map(|s| s.temperature).collect();
        let humidities: Vec<f64> = samples.iter().map(|s| s.humidity).collect();
        let temp_trend = detect_trend(&temperatures);
        let humidity_trend = detect_trend(&humidities);

        let day_classification = classify_day(
            latest.temperature,
            latest.humidity,
            latest.wind_speed,
            latest.description.as_deref(),
            is_night,
        );
        let uv_index = estimate_uv_index(hour, latest.humidity);

        let specialized = self
            .include_specialized
            .then(|| specialized_analysis(latest, comfort.score, uv_index, hour, is_night));

        Some(WeatherAnalysis {
            comfort_score: comfort.score,
            comfort_level: comfort.level,
            comfort_emoji: comfort.level.emoji(),
            day_classification,
            day_emoji: day_classification.emoji(),
            temp_trend,
            humidity_trend,
            trend_emoji: temp_trend.emoji(),
            stats,
            feels_like,
            uv_index,
            alerts: generate_alerts(latest, &stats),
            recommendations: generate_recommendations(latest, comfort.score),
            narrative: generate_narrative(latest, &stats, temp_trend, samples.len(), hour),
            specialized,
            is_night,
        })
    }
}
