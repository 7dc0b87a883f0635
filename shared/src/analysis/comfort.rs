//! Apparent temperature and comfort scoring

use super::format::round_half_up;
use crate::models::ComfortLevel;

/// Heat index applies from this temperature (°C) upward
pub const HEAT_INDEX_MIN_TEMP: f64 = 27.0;
/// ...and this relative humidity (%) upward
pub const HEAT_INDEX_MIN_HUMIDITY: f64 = 40.0;
/// Wind chill applies at or below this temperature (°C)
pub const WIND_CHILL_MAX_TEMP: f64 = 10.0;
/// ...with wind strictly above this speed (km/h)
pub const WIND_CHILL_MIN_WIND: f64 = 4.8;

/// Apparent temperature in °C.
///
/// Hot and humid conditions use the NOAA heat-index regression, cold and
/// windy conditions use the wind-chill formula, anything else is the air
/// temperature itself. Adjusted values are rounded to one decimal.
pub fn calculate_feels_like(temperature: f64, humidity: f64, wind_speed: f64) -> f64 {
    if temperature >= HEAT_INDEX_MIN_TEMP && humidity >= HEAT_INDEX_MIN_HUMIDITY {
        return round_one_decimal(heat_index(temperature, humidity));
    }

    if temperature <= WIND_CHILL_MAX_TEMP && wind_speed > WIND_CHILL_MIN_WIND {
        return round_one_decimal(wind_chill(temperature, wind_speed));
    }

    temperature
}

fn heat_index(t: f64, h: f64) -> f64 {
    -8.784_694_755_56 + 1.611_394_11 * t + 2.338_548_838_89 * h
        - 0.146_116_05 * t * h
        - 0.012_308_094 * t * t
        - 0.016_424_827_777_8 * h * h
        + 0.002_211_732 * t * t * h
        + 0.000_725_46 * t * h * h
        - 0.000_003_582 * t * t * h * h
}

fn wind_chill(t: f64, v: f64) -> f64 {
    let v16 = v.powf(0.16);
    13.12 + 0.6215 * t - 11.37 * v16 + 0.3965 * t * v16
}

fn round_one_decimal(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Comfort score with its tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortScore {
    /// Clamped and rounded, 0-100
    pub score: u8,
    pub level: ComfortLevel,
}

/// Score how pleasant the conditions are for outdoor activity.
///
/// Starts at 100 and subtracts one penalty per dimension. Warm days with a
/// light breeze earn a small bonus. The tier is taken from the clamped score
/// before rounding.
pub fn comfort_score(temperature: f64, humidity: f64, wind_speed: f64) -> ComfortScore {
    let mut score = 100.0;
    score -= temperature_penalty(temperature);
    score -= humidity_penalty(humidity);
    score -= wind_penalty(wind_speed);

    if temperature > 25.0 && (5.0..=20.0).contains(&wind_speed) {
        score += 5.0;
    }

    let clamped = score.clamp(0.0, 100.0);

    ComfortScore {
        score: clamped.round() as u8,
        level: ComfortLevel::from_score(clamped),
    }
}

fn temperature_penalty(t: f64) -> f64 {
    if t < 15.0 {
        (15.0 - t) * 4.0
    } else if t < 20.0 {
        (20.0 - t) * 2.0
    } else if t > 28.0 {
        (t - 28.0) * 3.0
    } else if t > 25.0 {
        (t - 25.0) * 1.5
    } else {
        0.0
    }
}

fn humidity_penalty(h: f64) -> f64 {
    if h < 30.0 {
        (30.0 - h) * 0.5
    } else if h > 80.0 {
        (h - 80.0) * 1.2
    } else if h > 70.0 {
        (h - 70.0) * 0.8
    } else {
        0.0
    }
}

fn wind_penalty(w: f64) -> f64 {
    if w > 50.0 {
        w - 50.0
    } else if w > 30.0 {
        (w - 30.0) * 0.5
    } else {
        0.0
    }
}
