//! Photovoltaic production estimate

use crate::models::{
    DailySolarForecast, IrradianceLevel, ProductionLevel, SolarAnalysis, WeatherSample,
};

const NIGHT_STATUS: &str = "Período noturno - painéis em standby";
const NIGHT_RECOMMENDATIONS: [&str; 2] = [
    "Momento ideal para manutenção preventiva dos painéis",
    "Verifique conexões e inversores durante o período sem produção",
];

/// Estimate solar production for the latest sample at local `hour`.
///
/// During the day the score is the hour-band base multiplied, in order, by
/// one humidity factor, one temperature factor and the breeze bonus. Only the
/// final product is clamped and rounded.
pub fn solar_analysis(latest: &WeatherSample, hour: u32, is_night: bool) -> SolarAnalysis {
    let t = latest.temperature;
    let h = latest.humidity;
    let w = latest.wind_speed;

    let mut recommendations: Vec<&'static str> = Vec::new();
    let mut alerts: Vec<&'static str> = Vec::new();

    let (production_score, irradiance_level, current_status) = if is_night {
        recommendations.extend(NIGHT_RECOMMENDATIONS);
        (0u8, IrradianceLevel::None, NIGHT_STATUS)
    } else {
        let (base, mut irradiance) = hour_band(hour);
        let mut score = base;

        if h > 90.0 {
            score *= 0.3;
            irradiance = IrradianceLevel::VeryLow;
            alerts.push("⚠️ Alta nebulosidade reduzindo significativamente a produção");
        } else if h > 80.0 {
            score *= 0.5;
            irradiance = IrradianceLevel::Low;
            alerts.push("☁️ Céu encoberto impactando a geração");
        } else if h > 70.0 {
            score *= 0.7;
            if irradiance == IrradianceLevel::Peak {
                irradiance = IrradianceLevel::High;
            }
        } else if h > 60.0 {
            score *= 0.85;
        }

        if t > 40.0 {
            score *= 0.85;
            alerts.push("🌡️ Temperatura muito alta reduzindo eficiência dos painéis em ~15%");
            recommendations.push("Considere sistema de ventilação para os painéis");
        } else if t > 35.0 {
            score *= 0.92;
            recommendations.push("Temperatura elevada - eficiência ligeiramente reduzida");
        } else if (20.0..=30.0).contains(&t) {
            score *= 1.05;
        }

        if (10.0..=30.0).contains(&w) && t > 30.0 {
            score *= 1.03;
            recommendations.push("Brisa ajudando a manter temperatura ideal dos painéis");
        } else if w > 50.0 {
            alerts.push("💨 Ventos fortes - verifique fixação dos painéis");
        }

        let score = score.clamp(0.0, 100.0).round() as u8;

        if h < 50.0 && (9..=15).contains(&hour) {
            recommendations.push("🌟 Condições ideais para máxima geração solar");
        }
        if score >= 70 {
            recommendations.push("📊 Excelente momento para consumo de energia intensivo");
        }

        (score, irradiance, production_status(score))
    };

    if recommendations.is_empty() {
        recommendations.push("Monitore a produção em tempo real pelo inversor");
    }

    SolarAnalysis {
        production_score,
        production_level: ProductionLevel::from_score(production_score),
        estimated_efficiency: production_score,
        peak_hours: peak_hours(hour, is_night),
        current_status,
        irradiance_level,
        recommendations,
        alerts,
        daily_forecast: daily_forecast(h),
    }
}

/// Base score and irradiance for a daylight hour
fn hour_band(hour: u32) -> (f64, IrradianceLevel) {
    match hour {
        10..=14 => (100.0, IrradianceLevel::Peak),
        8..=16 => (80.0, IrradianceLevel::High),
        6..=18 => (50.0, IrradianceLevel::Moderate),
        _ => (20.0, IrradianceLevel::Low),
    }
}

fn production_status(score: u8) -> &'static str {
    match score {
        80.. => "Produção máxima ⚡",
        60..=79 => "Boa produção ☀️",
        40..=59 => "Produção moderada ⛅",
        20..=39 => "Produção baixa ☁️",
        _ => "Produção mínima 🌥️",
    }
}

/// Human-readable window until the next 10h-14h peak
pub fn peak_hours(hour: u32, is_night: bool) -> String {
    if is_night || hour > 14 {
        "Amanhã entre 10h-14h".to_string()
    } else if hour < 10 {
        format!("Hoje entre 10h-14h (em {}h)", 10 - hour)
    } else {
        "Agora! Pico de produção".to_string()
    }
}

/// Humidity-only production outlook for the day
pub fn daily_forecast(humidity: f64) -> DailySolarForecast {
    let base: f64 = if humidity < 70.0 {
        85.0
    } else if humidity < 85.0 {
        60.0
    } else {
        35.0
    };

    DailySolarForecast {
        morning: (base * 0.7).round() as u8,
        afternoon: base as u8,
        total: (base * 0.85).round() as u8,
    }
}
