//! Day classification and UV estimate

use crate::models::{DayClassification, UvIndex};

const STORM_TERMS: &[&str] = &["thunder", "storm", "trovão", "tempestade"];
const RAIN_TERMS: &[&str] = &["rain", "chuva", "drizzle", "chuvisco"];
const SNOW_TERMS: &[&str] = &["snow", "neve"];
const FOG_TERMS: &[&str] = &["mist", "fog", "névoa", "neblina"];
const CLOUD_TERMS: &[&str] = &["cloud", "nublado", "nuvens"];
const PARTIAL_CLOUD_TERMS: &[&str] = &["few", "scattered", "parcial"];
const CLEAR_TERMS: &[&str] = &["clear", "limpo", "céu limpo"];

/// Hour-of-day (local) considered night
pub fn is_night_hour(hour: u32) -> bool {
    hour < 6 || hour >= 18
}

/// Pick a label for the current conditions.
///
/// A provider description wins when it contains a known keyword, otherwise
/// the numeric ladder over temperature, humidity and wind decides.
pub fn classify_day(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    description: Option<&str>,
    is_night: bool,
) -> DayClassification {
    description
        .and_then(|desc| classify_description(desc, is_night))
        .unwrap_or_else(|| classify_numeric(temperature, humidity, wind_speed, is_night))
}

fn classify_description(description: &str, is_night: bool) -> Option<DayClassification> {
    let desc = description.to_lowercase();
    let has = |terms: &[&str]| terms.iter().any(|term| desc.contains(term));

    if has(STORM_TERMS) {
        return Some(DayClassification::Stormy);
    }
    if has(RAIN_TERMS) {
        return Some(DayClassification::Rainy);
    }
    if has(SNOW_TERMS) {
        return Some(DayClassification::Snowy);
    }
    if has(FOG_TERMS) {
        return Some(DayClassification::Foggy);
    }
    if has(CLOUD_TERMS) {
        if has(PARTIAL_CLOUD_TERMS) {
            return Some(partly_cloudy(is_night));
        }
        return Some(DayClassification::Cloudy);
    }
    if has(CLEAR_TERMS) {
        return Some(clear(is_night));
    }

    None
}

fn classify_numeric(t: f64, h: f64, w: f64, is_night: bool) -> DayClassification {
    if h > 85.0 && t < 25.0 {
        DayClassification::Rainy
    } else if h > 80.0 && w > 40.0 {
        DayClassification::Stormy
    } else if t > 35.0 {
        DayClassification::VeryHot
    } else if t > 28.0 {
        if is_night {
            DayClassification::WarmNight
        } else {
            DayClassification::Hot
        }
    } else if t < 12.0 {
        DayClassification::Cold
    } else if t < 18.0 {
        DayClassification::Cool
    } else if h > 70.0 {
        DayClassification::Cloudy
    } else if w > 35.0 {
        DayClassification::Windy
    } else if (20.0..=28.0).contains(&t) && (40.0..=70.0).contains(&h) {
        if is_night {
            DayClassification::PleasantNight
        } else {
            DayClassification::Pleasant
        }
    } else if h > 50.0 {
        partly_cloudy(is_night)
    } else {
        clear(is_night)
    }
}

fn partly_cloudy(is_night: bool) -> DayClassification {
    if is_night {
        DayClassification::CloudyNight
    } else {
        DayClassification::PartlyCloudy
    }
}

fn clear(is_night: bool) -> DayClassification {
    if is_night {
        DayClassification::ClearNight
    } else {
        DayClassification::Sunny
    }
}

/// Estimate the UV band from local hour, using humidity as a cloud proxy
pub fn estimate_uv_index(hour: u32, humidity: f64) -> UvIndex {
    if hour < 6 || hour > 18 {
        return UvIndex::None;
    }
    if hour < 9 || hour > 16 {
        return UvIndex::Low;
    }
    if humidity > 80.0 {
        return UvIndex::Moderate;
    }
    if (10..=14).contains(&hour) {
        if humidity < 50.0 {
            return UvIndex::Extreme;
        }
        if humidity < 70.0 {
            return UvIndex::VeryHigh;
        }
    }
    UvIndex::High
}
