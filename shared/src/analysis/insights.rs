//! Markdown insights rendered without any external service

use std::fmt::Write;

use super::format::fixed;
use crate::models::{WeatherAnalysis, WeatherSample};

pub const AWAITING_DATA_MESSAGE: &str = "🌤️ Aguardando dados climáticos para gerar análise...\n\n\
     Os insights serão gerados automaticamente assim que houver registros suficientes.";

const LOCAL_FOOTER: &str =
    "\n\n---\n*Análise gerada localmente. Configure a OpenAI para insights avançados com IA.*";

/// Render the analysis as markdown for the dashboard.
///
/// `samples` must be the newest-first batch the analysis was computed from.
/// With no samples or no analysis the waiting message is returned.
pub fn render_local_insights(
    samples: &[WeatherSample],
    analysis: Option<&WeatherAnalysis>,
) -> String {
    let (Some(latest), Some(analysis)) = (samples.first(), analysis) else {
        return AWAITING_DATA_MESSAGE.to_string();
    };

    let mut text = format!(
        "{} **Clima {}** em {}\n\n",
        analysis.day_emoji,
        analysis.day_classification.label(),
        latest.city
    );
    text.push_str(&analysis.narrative);

    let _ = write!(
        text,
        "\n\n---\n\n🎯 **Índice de Conforto:** {}/100 {}\n*{}* - {}",
        analysis.comfort_score,
        analysis.comfort_emoji,
        analysis.comfort_level.label(),
        comfort_advice(analysis.comfort_score)
    );

    let delta = analysis.feels_like - latest.temperature;
    if delta.abs() > 2.0 {
        let _ = write!(text, "\n\n🌡️ **Sensação Térmica:** {}°C", fixed(analysis.feels_like, 1));
        text.push_str(if delta > 0.0 {
            " *(mais quente devido à umidade)*"
        } else {
            " *(mais frio devido ao vento)*"
        });
    }

    let _ = write!(text, "\n\n☀️ **Índice UV:** {}", analysis.uv_index);

    if !analysis.recommendations.is_empty() {
        text.push_str("\n\n---\n\n📋 **Recomendações:**\n");
        for rec in &analysis.recommendations {
            let _ = writeln!(text, "• {}", rec);
        }
    }

    if let Some(specialized) = &analysis.specialized {
        text.push_str("\n\n---\n\n🎯 **Análises Especializadas:**\n");
        let _ = writeln!(text, "• 🌾 Agricultura: {}", specialized.agriculture.status.label());
        let _ = writeln!(
            text,
            "• 🏥 Saúde: Risco respiratório {}",
            specialized.health.respiratory_risk.label().to_lowercase()
        );
        let _ = writeln!(text, "• ⚽ Esportes: {}", specialized.sports.best_time_today);
        let _ = writeln!(
            text,
            "• ⚡ Ar-condicionado: {}",
            specialized.energy.ac_recommendation.label()
        );
    }

    text.push_str(LOCAL_FOOTER);
    text
}

fn comfort_advice(score: u8) -> &'static str {
    match score {
        70.. => "Excelentes condições para atividades ao ar livre!",
        50..=69 => "Condições aceitáveis, mas tome precauções.",
        _ => "Considere atividades em ambientes fechados.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::WeatherAnalyzer;
    use chrono::{TimeZone, Utc};

    fn render(temperature: f64, humidity: f64, wind: f64, utc_hour: u32) -> String {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, utc_hour, 0, 0).unwrap();
        let samples = [WeatherSample::new("Penápolis", ts, temperature, humidity, wind)];
        let analysis = WeatherAnalyzer::default().analyze(&samples);
        render_local_insights(&samples, analysis.as_ref())
    }

    #[test]
    fn test_awaiting_data() {
        assert_eq!(render_local_insights(&[], None), AWAITING_DATA_MESSAGE);
    }

    #[test]
    fn test_pleasant_day_sections() {
        // 15:00 UTC is noon local
        let text = render(22.0, 55.0, 5.0, 15);

        assert!(text.starts_with("🌤️ **Clima Agradável** em Penápolis\n\n📍 **Penápolis**"));
        assert!(text.contains("🎯 **Índice de Conforto:** 100/100 😊\n*Excelente* - Excelentes condições"));
        assert!(text.contains("☀️ **Índice UV:** Muito Alto (8-10)"));
        assert!(text.contains("• 🏃 Ótimo para exercícios ao ar livre\n"));
        assert!(text.contains("• 🏥 Saúde: Risco respiratório baixo\n"));
        assert!(!text.contains("Sensação Térmica"));
        assert!(text.ends_with(LOCAL_FOOTER));
    }

    #[test]
    fn test_feels_like_line_when_far_from_air_temperature() {
        let hot = render(34.0, 70.0, 0.0, 15);
        assert!(hot.contains("🌡️ **Sensação Térmica:**"));
        assert!(hot.contains("*(mais quente devido à umidade)*"));

        let cold = render(2.0, 50.0, 30.0, 15);
        assert!(cold.contains("*(mais frio devido ao vento)*"));
    }

    #[test]
    fn test_poor_comfort_advice() {
        assert_eq!(comfort_advice(10), "Considere atividades em ambientes fechados.");
        assert_eq!(comfort_advice(50), "Condições aceitáveis, mas tome precauções.");
        assert_eq!(comfort_advice(70), "Excelentes condições para atividades ao ar livre!");
    }
}
