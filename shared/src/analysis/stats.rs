//! Batch statistics

use crate::models::{WeatherSample, WeatherStats};

/// Aggregate temperature, humidity and wind over the whole batch.
///
/// Returns `None` for an empty batch.
pub fn compute_stats(samples: &[WeatherSample]) -> Option<WeatherStats> {
    if samples.is_empty() {
        return None;
    }

    let temps = Summary::over(samples.iter().map(|s| s.temperature));
    let humidity = Summary::over(samples.iter().map(|s| s.humidity));
    let wind = Summary::over(samples.iter().map(|s| s.wind_speed));

    Some(WeatherStats {
        avg_temp: temps.mean,
        max_temp: temps.max,
        min_temp: temps.min,
        avg_humidity: humidity.mean,
        max_humidity: humidity.max,
        min_humidity: humidity.min,
        avg_wind: wind.mean,
        max_wind: wind.max,
        temp_variation: temps.max - temps.min,
    })
}

struct Summary {
    mean: f64,
    max: f64,
    min: f64,
}

impl Summary {
    fn over(values: impl Iterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;

        for value in values {
            count += 1;
            sum += value;
            max = max.max(value);
            min = min.min(value);
        }

        Self {
            mean: sum / count as f64,
            max,
            min,
        }
    }
}
