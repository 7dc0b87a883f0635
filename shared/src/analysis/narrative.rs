//! Templated narrative text

use std::fmt::Write;

use super::format::fixed;
use crate::models::{Trend, WeatherSample, WeatherStats};

/// Greeting for a local hour
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Bom dia!",
        12..=17 => "Boa tarde!",
        _ => "Boa noite!",
    }
}

fn temperature_descriptor(t: f64) -> &'static str {
    if t > 30.0 {
        "com calor intenso"
    } else if t > 25.0 {
        "com clima quente"
    } else if t < 15.0 {
        "com clima frio"
    } else {
        "com temperatura agradável"
    }
}

fn trend_sentence(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "📈 **Tendência:** Temperatura em **elevação**.",
        Trend::Falling => "📉 **Tendência:** Temperatura em **queda**.",
        Trend::Stable => "➡️ **Tendência:** Temperatura **estável**.",
    }
}

/// Compose the markdown narrative for the latest sample.
///
/// `total` is the batch size; the history line only appears when there is
/// more than one sample.
pub fn generate_narrative(
    latest: &WeatherSample,
    stats: &WeatherStats,
    temp_trend: Trend,
    total: usize,
    hour: u32,
) -> String {
    let t = latest.temperature;
    let h = latest.humidity;
    let w = latest.wind_speed;

    let mut text = format!(
        "📍 **{}** - {} Agora temos **{}°C** {} e umidade de **{}%**. ",
        latest.city,
        greeting(hour),
        fixed(t, 1),
        temperature_descriptor(t),
        fixed(h, 0)
    );

    // Writing into a String cannot fail
    if w > 30.0 {
        let _ = write!(text, "Ventos fortes de **{} km/h**. ", fixed(w, 1));
    } else if w > 15.0 {
        let _ = write!(text, "Brisa de **{} km/h**. ", fixed(w, 1));
    }

    text.push_str("\n\n");
    text.push_str(trend_sentence(temp_trend));

    if total > 1 {
        let _ = write!(
            text,
            "\n\n📊 **Histórico** ({} registros): {}°C - {}°C (média: {}°C)",
            total,
            fixed(stats.min_temp, 1),
            fixed(stats.max_temp, 1),
            fixed(stats.avg_temp, 1)
        );
    }

    text
}
