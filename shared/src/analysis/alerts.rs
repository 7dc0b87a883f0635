//! Threshold alerts and short recommendations

use super::format::fixed;
use crate::models::{AlertSeverity, WeatherAlert, WeatherSample, WeatherStats};

/// Recommendations beyond this count are dropped
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Evaluate the alert rules in a fixed order.
///
/// Each dimension (temperature, humidity, wind, batch swing) raises at most
/// one alert. When nothing fires and the latest sample sits in the pleasant
/// band a single success alert is emitted instead.
pub fn generate_alerts(latest: &WeatherSample, stats: &WeatherStats) -> Vec<WeatherAlert> {
    let t = latest.temperature;
    let h = latest.humidity;
    let w = latest.wind_speed;
    let mut alerts = Vec::new();

    if t > 38.0 {
        alerts.push(alert(
            AlertSeverity::Danger,
            "Calor Extremo",
            format!(
                "Temperatura de {}°C! Risco à saúde. Evite exposição ao sol e mantenha-se hidratado.",
                fixed(t, 1)
            ),
            "🔥",
        ));
    } else if t > 32.0 {
        alerts.push(alert(
            AlertSeverity::Warning,
            "Muito Quente",
            format!(
                "Temperatura de {}°C. Beba bastante água e evite atividades intensas ao ar livre.",
                fixed(t, 1)
            ),
            "☀️",
        ));
    } else if t < 5.0 {
        alerts.push(alert(
            AlertSeverity::Danger,
            "Frio Intenso",
            format!("Temperatura de {}°C! Vista roupas adequadas e proteja-se.", fixed(t, 1)),
            "🥶",
        ));
    } else if t < 12.0 {
        alerts.push(alert(
            AlertSeverity::Info,
            "Temperatura Baixa",
            format!("Temperatura de {}°C. Recomenda-se agasalho.", fixed(t, 1)),
            "❄️",
        ));
    }

    if h > 90.0 {
        alerts.push(alert(
            AlertSeverity::Warning,
            "Umidade Muito Alta",
            format!("Umidade em {}%. Alta probabilidade de chuva.", fixed(h, 0)),
            "🌧️",
        ));
    } else if h < 25.0 {
        alerts.push(alert(
            AlertSeverity::Warning,
            "Ar Muito Seco",
            format!("Umidade em apenas {}%. Hidrate-se bem!", fixed(h, 0)),
            "🏜️",
        ));
    }

    if w > 60.0 {
        alerts.push(alert(
            AlertSeverity::Danger,
            "Vendaval",
            format!("Ventos de {} km/h! Evite áreas abertas.", fixed(w, 1)),
            "🌪️",
        ));
    } else if w > 40.0 {
        alerts.push(alert(
            AlertSeverity::Warning,
            "Ventos Fortes",
            format!("Ventos de {} km/h. Cuidado ao dirigir.", fixed(w, 1)),
            "💨",
        ));
    }

    if stats.temp_variation > 12.0 {
        alerts.push(alert(
            AlertSeverity::Info,
            "Grande Variação Térmica",
            format!("Variação de {}°C. Leve agasalho.", fixed(stats.temp_variation, 1)),
            "🌡️",
        ));
    }

    if alerts.is_empty() && is_pleasant(t, h) {
        alerts.push(alert(
            AlertSeverity::Success,
            "Clima Perfeito",
            "Condições ideais para atividades ao ar livre!".to_string(),
            "✨",
        ));
    }

    alerts
}

/// 20-28 °C with 40-70 % humidity
pub fn is_pleasant(temperature: f64, humidity: f64) -> bool {
    (20.0..=28.0).contains(&temperature) && (40.0..=70.0).contains(&humidity)
}

fn alert(
    severity: AlertSeverity,
    title: &'static str,
    message: String,
    icon: &'static str,
) -> WeatherAlert {
    WeatherAlert {
        severity,
        title,
        message,
        icon,
    }
}

/// Short actionable tips, capped at [`MAX_RECOMMENDATIONS`]
pub fn generate_recommendations(latest: &WeatherSample, comfort_score: u8) -> Vec<&'static str> {
    let t = latest.temperature;
    let h = latest.humidity;
    let w = latest.wind_speed;
    let mut tips = Vec::new();

    if t > 30.0 {
        tips.push("👕 Vista roupas leves e claras");
        tips.push("🧴 Use protetor solar FPS 50+");
        tips.push("💧 Beba água a cada 30 minutos");
    } else if t < 18.0 {
        tips.push("🧥 Vista agasalho ou casaco");
    }

    if h < 40.0 {
        tips.push("💧 Hidrate-se constantemente");
        tips.push("👃 Use soro fisiológico");
    }

    if comfort_score >= 70 && w < 30.0 {
        tips.push("🏃 Ótimo para exercícios ao ar livre");
    } else if t > 32.0 {
        tips.push("🏠 Prefira ambientes climatizados");
    }

    if h > 85.0 {
        tips.push("☂️ Leve guarda-chuva");
    }

    if w > 35.0 {
        tips.push("🚗 Dirija com cuidado");
    }

    tips.truncate(MAX_RECOMMENDATIONS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute_stats;
    use chrono::{TimeZone, Utc};

    fn sample(temperature: f64, humidity: f64, wind: f64) -> WeatherSample {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 15, 0, 0).unwrap();
        WeatherSample::new("Penápolis", ts, temperature, humidity, wind)
    }

    fn alerts_for(batch: &[WeatherSample]) -> Vec<WeatherAlert> {
        let stats = compute_stats(batch).unwrap();
        generate_alerts(&batch[0], &stats)
    }

    #[test]
    fn test_pleasant_conditions_single_success() {
        let alerts = alerts_for(&[sample(22.0, 55.0, 5.0)]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Success);
        assert_eq!(alerts[0].title, "Clima Perfeito");
    }

    #[test]
    fn test_no_success_outside_pleasant_band() {
        // Nothing fires but 30°C is outside the pleasant band
        assert!(alerts_for(&[sample(30.0, 55.0, 5.0)]).is_empty());
    }

    #[test]
    fn test_temperature_alert_message_format() {
        let alerts = alerts_for(&[sample(33.0, 50.0, 5.0)]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[0].title, "Muito Quente");
        assert!(alerts[0].message.starts_with("Temperatura de 33.0°C."));
    }

    #[test]
    fn test_temperature_rules_are_exclusive() {
        let alerts = alerts_for(&[sample(40.0, 50.0, 5.0)]);
        let titles: Vec<_> = alerts.iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Calor Extremo"]);

        let cold = alerts_for(&[sample(3.0, 50.0, 5.0)]);
        assert_eq!(cold[0].title, "Frio Intenso");
        assert_eq!(cold[0].severity, AlertSeverity::Danger);

        let cool = alerts_for(&[sample(10.0, 50.0, 5.0)]);
        assert_eq!(cool[0].title, "Temperatura Baixa");
    }

    #[test]
    fn test_dimensions_fire_independently_in_order() {
        let batch = [sample(40.0, 95.0, 70.0), sample(20.0, 50.0, 5.0)];
        let titles: Vec<_> = alerts_for(&batch).iter().map(|a| a.title).collect();
        assert_eq!(
            titles,
            vec![
                "Calor Extremo",
                "Umidade Muito Alta",
                "Vendaval",
                "Grande Variação Térmica"
            ]
        );
    }

    #[test]
    fn test_dry_air_and_strong_wind() {
        let alerts = alerts_for(&[sample(24.0, 20.0, 45.0)]);
        let titles: Vec<_> = alerts.iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Ar Muito Seco", "Ventos Fortes"]);
        assert_eq!(alerts[0].message, "Umidade em apenas 20%. Hidrate-se bem!");
        assert_eq!(alerts[1].message, "Ventos de 45.0 km/h. Cuidado ao dirigir.");
    }

    #[test]
    fn test_alert_values_round_halves_up() {
        let alerts = alerts_for(&[sample(32.25, 24.5, 5.0)]);
        assert!(alerts[0].message.starts_with("Temperatura de 32.3°C."));
        assert_eq!(alerts[1].message, "Umidade em apenas 25%. Hidrate-se bem!");
    }

    #[test]
    fn test_recommendations_capped_at_five() {
        // Hot, dry and windy: 3 + 2 + 1 + 1 rules fire
        let tips = generate_recommendations(&sample(35.0, 20.0, 40.0), 10);
        assert_eq!(tips.len(), MAX_RECOMMENDATIONS);
        assert_eq!(tips[0], "👕 Vista roupas leves e claras");
        assert_eq!(tips[4], "👃 Use soro fisiológico");
    }

    #[test]
    fn test_recommendations_for_comfortable_day() {
        let tips = generate_recommendations(&sample(22.0, 55.0, 5.0), 100);
        assert_eq!(tips, vec!["🏃 Ótimo para exercícios ao ar livre"]);
    }

    #[test]
    fn test_recommendations_cold_and_rainy() {
        let tips = generate_recommendations(&sample(15.0, 90.0, 5.0), 60);
        assert_eq!(tips, vec!["🧥 Vista agasalho ou casaco", "☂️ Leve guarda-chuva"]);
    }
}
