//! Sector analyses derived from the latest sample
//!
//! Every sector is a pure function of the same snapshot, so they can be
//! computed in any order.

use crate::models::{
    AcRecommendation, AgricultureAnalysis, AgricultureStatus, EnergyAnalysis, HealthAnalysis,
    RespiratoryRisk, SolarPotential, SpecializedAnalysis, SportsAnalysis, UvIndex, UvProtection,
    WeatherSample,
};

use super::solar::solar_analysis;

/// Build all sector analyses for one snapshot
pub fn specialized_analysis(
    latest: &WeatherSample,
    comfort_score: u8,
    uv_index: UvIndex,
    hour: u32,
    is_night: bool,
) -> SpecializedAnalysis {
    SpecializedAnalysis {
        agriculture: agriculture_analysis(latest),
        health: health_analysis(latest, uv_index),
        sports: sports_analysis(latest, comfort_score, is_night),
        energy: energy_analysis(latest, is_night),
        solar: solar_analysis(latest, hour, is_night),
    }
}

/// Crop-friendliness, 0-100
pub fn agriculture_score(temperature: f64, humidity: f64, wind_speed: f64) -> u8 {
    let mut score = 100.0;

    if temperature < 15.0 {
        score -= (15.0 - temperature) * 5.0;
    } else if temperature > 35.0 {
        score -= (temperature - 35.0) * 5.0;
    } else if temperature < 20.0 || temperature > 30.0 {
        score -= 10.0;
    }

    if humidity < 40.0 {
        score -= 40.0 - humidity;
    } else if humidity > 85.0 {
        score -= (humidity - 85.0) * 1.5;
    }

    if wind_speed > 50.0 {
        score -= wind_speed - 50.0;
    }

    score.round().clamp(0.0, 100.0) as u8
}

pub fn agriculture_analysis(latest: &WeatherSample) -> AgricultureAnalysis {
    let t = latest.temperature;
    let h = latest.humidity;
    let w = latest.wind_speed;

    let score = agriculture_score(t, h, w);
    let mut risks = Vec::new();
    let mut recommendations = Vec::new();

    if h < 40.0 {
        risks.push("Risco de estresse hídrico nas plantas");
        recommendations.push("Aumentar frequência de irrigação");
    }
    if t > 35.0 {
        risks.push("Temperatura excessiva pode causar queimaduras foliares");
        recommendations.push("Irrigar nas horas mais frescas");
    }
    if h > 85.0 {
        risks.push("Alta umidade favorece doenças fúngicas");
        recommendations.push("Monitorar sinais de fungos nas lavouras");
    }
    if w > 40.0 {
        risks.push("Ventos fortes podem danificar culturas");
    }
    if risks.is_empty() {
        recommendations.push("Condições ideais para manejo agrícola");
    }

    AgricultureAnalysis {
        score,
        status: AgricultureStatus::from_score(score),
        recommendations,
        risks,
    }
}

pub fn health_analysis(latest: &WeatherSample, uv_index: UvIndex) -> HealthAnalysis {
    let t = latest.temperature;
    let h = latest.humidity;

    let respiratory_risk = if h < 30.0 {
        RespiratoryRisk::High
    } else if h < 50.0 {
        RespiratoryRisk::Moderate
    } else {
        RespiratoryRisk::Low
    };
    let hydration_alert = t > 28.0 || h < 40.0;
    // Only the "Alto" bands escalate; Extremo stays at Recomendado
    let uv_protection = match uv_index {
        UvIndex::High | UvIndex::VeryHigh => UvProtection::Essential,
        _ => UvProtection::Recommended,
    };

    let mut recommendations = Vec::new();
    if hydration_alert {
        recommendations.push("Beba água a cada 30 minutos");
    }
    if respiratory_risk == RespiratoryRisk::High {
        recommendations.push("Use soro fisiológico nas narinas");
        recommendations.push("Mantenha ambientes umidificados");
    }
    if t > 32.0 {
        recommendations.push("Evite exposição solar entre 10h e 16h");
    }

    HealthAnalysis {
        respiratory_risk,
        hydration_alert,
        uv_protection,
        recommendations,
    }
}

pub fn sports_analysis(
    latest: &WeatherSample,
    comfort_score: u8,
    is_night: bool,
) -> SportsAnalysis {
    let t = latest.temperature;
    let h = latest.humidity;

    let mut best_activities = Vec::new();
    let mut avoid = Vec::new();

    if t > 30.0 {
        avoid.extend(["Corrida ao ar livre", "Esportes de alta intensidade"]);
        best_activities.extend(["Natação", "Exercícios em academia climatizada"]);
    } else if (20.0..=28.0).contains(&t) {
        best_activities.extend(["Corrida", "Ciclismo", "Futebol", "Caminhada"]);
    } else if t < 15.0 {
        best_activities.push("Corrida leve");
        avoid.push("Esportes aquáticos ao ar livre");
    }

    if h > 85.0 {
        avoid.push("Atividades intensas ao ar livre");
    }

    let best_time_today = if is_night {
        "Amanhã entre 6h-9h ou 17h-19h"
    } else if t > 28.0 {
        "Entre 6h-8h ou após 18h"
    } else {
        "Agora é um bom momento!"
    };

    SportsAnalysis {
        outdoor_score: comfort_score,
        best_activities,
        avoid,
        best_time_today,
    }
}

pub fn energy_analysis(latest: &WeatherSample, is_night: bool) -> EnergyAnalysis {
    let t = latest.temperature;
    let h = latest.humidity;

    let ac_recommendation = if t > 28.0 {
        AcRecommendation::Recommended
    } else if t > 25.0 {
        AcRecommendation::Optional
    } else {
        AcRecommendation::Unnecessary
    };

    let solar_potential = if h < 60.0 && !is_night {
        SolarPotential::High
    } else if h < 80.0 && !is_night {
        SolarPotential::Moderate
    } else {
        SolarPotential::Low
    };

    let mut energy_saving_tips = Vec::new();
    if t > 30.0 {
        energy_saving_tips.push("Configure o ar-condicionado em 23°C");
        energy_saving_tips.push("Feche cortinas para bloquear o sol");
    }
    if !is_night && h < 70.0 {
        energy_saving_tips.push("Aproveite a luz natural");
    }
    if t < 25.0 {
        energy_saving_tips.push("Abra janelas para ventilação natural");
    }

    EnergyAnalysis {
        ac_recommendation,
        solar_potential,
        energy_saving_tips,
    }
}
