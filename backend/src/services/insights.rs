//! Insight orchestration
//!
//! Runs the analyzer, then asks the language model for a narrative and the
//! per-sector texts. Any failure of the main call falls back to the locally
//! rendered insights.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};
use shared::analysis::{fixed, render_local_insights, DEFAULT_UTC_OFFSET_HOURS};
use shared::models::{
    InsightSource, InsightsResponse, SectorInsights, WeatherAnalysis, WeatherSample,
};
use shared::WeatherAnalyzer;

use crate::config::Config;
use crate::error::AppResult;
use crate::external::OpenAiClient;

const MAIN_TEMPERATURE: f64 = 0.85;
const MAIN_MAX_TOKENS: u32 = 1500;
const SECTOR_TEMPERATURE: f64 = 0.7;
const SECTOR_MAX_TOKENS: u32 = 800;

const BRASILIA_OFFSET_SECS: i32 = DEFAULT_UTC_OFFSET_HOURS * 3600;

const MAIN_SYSTEM_PROMPT: &str = "Você é o \"Mestre do Clima\", um meteorologista brasileiro \
carismático que conhece a fundo o interior paulista e sua economia agrícola. \
Escreva análises ricas, criativas e práticas, personalizadas para a cidade e o momento, \
com tom amigável e positivo. Nunca seja genérico.";

const SECTOR_SYSTEM_PROMPT: &str = "Você é um consultor especializado que fornece análises \
práticas e diretas. Responda APENAS com JSON válido, sem markdown.";

/// Insight orchestrator
#[derive(Clone)]
pub struct InsightsService {
    analyzer: WeatherAnalyzer,
    client: Option<OpenAiClient>,
}

impl InsightsService {
    /// Build from config; the model client is only created for a real key
    pub fn new(config: &Config) -> AppResult<Self> {
        let analyzer = config.analysis.analyzer()?;

        let client = if config.ai.is_configured() {
            Some(OpenAiClient::from_config(&config.ai)?)
        } else {
            None
        };

        Ok(Self::with_client(analyzer, client))
    }

    pub fn with_client(analyzer: WeatherAnalyzer, client: Option<OpenAiClient>) -> Self {
        Self { analyzer, client }
    }

    pub fn analyzer(&self) -> &WeatherAnalyzer {
        &self.analyzer
    }

    /// Produce insights for newest-first `samples`. Never fails; the local
    /// renderer covers every model error.
    pub async fn generate(&self, samples: &[WeatherSample]) -> InsightsResponse {
        let analysis = self.analyzer.analyze(samples);

        if let (Some(client), Some(latest), Some(analysis)) =
            (&self.client, samples.first(), analysis.as_ref())
        {
            let local_time = self.analyzer.local_time(latest.timestamp);
            let main_prompt = build_main_prompt(latest, analysis, samples.len(), local_time);
            let sector_prompt = build_sector_prompt(latest, analysis);

            let (main, sectors) = tokio::join!(
                client.chat_completion(
                    MAIN_SYSTEM_PROMPT,
                    &main_prompt,
                    MAIN_TEMPERATURE,
                    MAIN_MAX_TOKENS
                ),
                request_sector_insights(client, &sector_prompt),
            );

            match main {
                Ok(insights) => {
                    return InsightsResponse {
                        insights,
                        analysis: Some(analysis.clone()),
                        specialized_insights: Some(sectors),
                        generated_at: Utc::now(),
                        source: InsightSource::OpenAi,
                        model: Some(client.model().to_string()),
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Language model insights failed, using local analysis"
                    );
                }
            }
        }

        InsightsResponse {
            insights: render_local_insights(samples, analysis.as_ref()),
            analysis,
            specialized_insights: None,
            generated_at: Utc::now(),
            source: InsightSource::Local,
            model: None,
        }
    }
}

/// Sector call; any failure degrades to empty texts
async fn request_sector_insights(client: &OpenAiClient, prompt: &str) -> SectorInsights {
    let content = match client
        .chat_completion(SECTOR_SYSTEM_PROMPT, prompt, SECTOR_TEMPERATURE, SECTOR_MAX_TOKENS)
        .await
    {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(error = %e, "Sector insights request failed");
            return SectorInsights::default();
        }
    };

    parse_sector_insights(&content).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Sector insights were not valid JSON");
        SectorInsights::default()
    })
}

fn parse_sector_insights(content: &str) -> Result<SectorInsights, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(content))
}

/// Remove markdown code fences (```json ... ```) around a model reply
pub fn strip_code_fences(content: &str) -> String {
    content
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Short profile of well-known cities, with a generic fallback
pub fn city_context(city: &str) -> String {
    let profile = match city {
        "Penápolis" => {
            "🏛️ PERFIL DA CIDADE:\n\
             • Região: Noroeste Paulista, interior de São Paulo\n\
             • Apelido: \"Terra da Cana de Açúcar\"\n\
             • População: ~62.000 habitantes, altitude 416 m\n\
             • Economia: cana-de-açúcar, etanol, pecuária\n\
             • Clima: tropical, verões quentes e úmidos, invernos secos\n\
             • Bioma: transição Mata Atlântica e Cerrado"
        }
        "São Paulo" => {
            "🏙️ PERFIL DA CIDADE:\n\
             • Maior cidade do Brasil e da América do Sul\n\
             • População: ~12 milhões (região metropolitana: 22 milhões)\n\
             • Altitude: 760 m\n\
             • Clima: subtropical úmido, \"cidade da garoa\" com microclimas"
        }
        "Campinas" => {
            "🎓 PERFIL DA CIDADE:\n\
             • Região: interior de São Paulo (RMC)\n\
             • População: ~1,2 milhão, altitude 680 m\n\
             • Economia: tecnologia, universidades, indústria\n\
             • Clima: subtropical com boa amplitude térmica"
        }
        "Ribeirão Preto" => {
            "☕ PERFIL DA CIDADE:\n\
             • Região: Nordeste Paulista\n\
             • Apelido: \"Capital do Agronegócio\"\n\
             • População: ~720.000\n\
             • Clima: tropical, verões muito quentes"
        }
        _ => {
            return format!(
                "📍 PERFIL DA CIDADE:\n\
                 • {} - cidade brasileira\n\
                 • Clima típico da região\n\
                 • Dados sendo coletados para análises mais detalhadas",
                city
            )
        }
    };
    profile.to_string()
}

/// Southern hemisphere season for a zero-based month (0 = January)
pub fn season_context(month0: u32) -> &'static str {
    match month0 {
        11 | 0 | 1 => "☀️ Verão (época mais quente e chuvosa)",
        2..=4 => "🍂 Outono (temperaturas amenas, menos chuva)",
        5..=7 => "❄️ Inverno (seco, noites frias)",
        _ => "🌸 Primavera (aquecendo, chuvas retornando)",
    }
}

pub fn period_of_day(hour: u32) -> &'static str {
    match hour {
        0..=5 => "🌙 Madrugada",
        6..=11 => "🌅 Manhã",
        12..=17 => "☀️ Tarde",
        _ => "🌆 Noite",
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Domingo",
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
    }
}

/// Portuguese month name for a zero-based month
pub fn month_name(month0: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
        "Outubro", "Novembro", "Dezembro",
    ];
    MONTHS.get(month0 as usize).copied().unwrap_or("")
}

/// Name of the reference zone as shown in prompts
pub fn zone_label(offset: FixedOffset) -> String {
    if offset.local_minus_utc() == BRASILIA_OFFSET_SECS {
        "Brasília".to_string()
    } else {
        format!("UTC{}", offset)
    }
}

/// Narrative prompt with location, local moment, readings and history
pub fn build_main_prompt(
    latest: &WeatherSample,
    analysis: &WeatherAnalysis,
    total_samples: usize,
    local_time: DateTime<FixedOffset>,
) -> String {
    let hour = local_time.hour();
    let month0 = local_time.month0();
    let stats = &analysis.stats;

    let feels_note = if analysis.feels_like > latest.temperature {
        " (↑ pela umidade)"
    } else if analysis.feels_like < latest.temperature {
        " (↓ pelo vento)"
    } else {
        ""
    };

    let mut conditions = String::new();
    if let Some(description) = &latest.description {
        conditions.push_str(&format!("• Condição: {}\n", description));
    }
    if let Some(pressure) = latest.pressure {
        conditions.push_str(&format!("• Pressão: {} hPa\n", pressure));
    }

    let tip_period = match hour {
        0..=11 => "manhã",
        12..=17 => "tarde",
        _ => "noite",
    };

    format!(
        "Crie uma análise climática rica, envolvente e memorável.\n\
         \n\
         📍 LOCALIZAÇÃO: {city}\n\
         {context}\n\
         \n\
         📅 MOMENTO ATUAL\n\
         • {weekday}, {day} de {month} de {year}\n\
         • Horário: {hour:02}:{minute:02} ({zone})\n\
         • Período: {period}\n\
         • Estação: {season}\n\
         \n\
         🌡️ DADOS EM TEMPO REAL\n\
         • Temperatura: {temp}°C\n\
         • Sensação: {feels}°C{feels_note}\n\
         • Classificação: {class} {day_emoji}\n\
         • Umidade: {humidity}%\n\
         • Vento: {wind} km/h\n\
         {conditions}\
         • Conforto: {comfort}/100 ({level} {comfort_emoji})\n\
         • UV estimado: {uv}\n\
         • Tendência: {trend} {trend_emoji}\n\
         \n\
         📊 HISTÓRICO ({total} medições)\n\
         • Mínima: {min}°C\n\
         • Média: {avg}°C\n\
         • Máxima: {max}°C\n\
         • Amplitude: {variation}°C\n\
         • Umidade média: {avg_humidity}%\n\
         \n\
         Organize a resposta nas seções:\n\
         ## 🌤️ VISÃO GERAL\n\
         ## 🏙️ {city_upper} HOJE\n\
         ## 📈 ANÁLISE TÉCNICA\n\
         ## 🔮 PRÓXIMAS HORAS\n\
         ## 💡 DICAS DO DIA (inclua uma dica especial para a {tip_period})\n\
         ## 🎯 MOMENTO PERFEITO\n\
         ## 🌟 CURIOSIDADE\n\
         ## ✨ MENSAGEM FINAL\n\
         \n\
         Use emojis com moderação, personalize para {city} e escreva no máximo 600 palavras.",
        city = latest.city,
        context = city_context(&latest.city),
        weekday = weekday_name(local_time.weekday()),
        day = local_time.day(),
        month = month_name(month0),
        year = local_time.year(),
        hour = hour,
        minute = local_time.minute(),
        zone = zone_label(*local_time.offset()),
        period = period_of_day(hour),
        season = season_context(month0),
        temp = fixed(latest.temperature, 1),
        feels = fixed(analysis.feels_like, 1),
        feels_note = feels_note,
        class = analysis.day_classification,
        day_emoji = analysis.day_emoji,
        humidity = fixed(latest.humidity, 0),
        wind = fixed(latest.wind_speed, 1),
        conditions = conditions,
        comfort = analysis.comfort_score,
        level = analysis.comfort_level,
        comfort_emoji = analysis.comfort_emoji,
        uv = analysis.uv_index,
        trend = analysis.temp_trend,
        trend_emoji = analysis.trend_emoji,
        total = total_samples,
        min = fixed(stats.min_temp, 1),
        avg = fixed(stats.avg_temp, 1),
        max = fixed(stats.max_temp, 1),
        variation = fixed(stats.temp_variation, 1),
        avg_humidity = fixed(stats.avg_humidity, 0),
        city_upper = latest.city.to_uppercase(),
        tip_period = tip_period,
    )
}

/// Sector prompt asking for a five-key JSON object
pub fn build_sector_prompt(latest: &WeatherSample, analysis: &WeatherAnalysis) -> String {
    format!(
        "Com base nos dados climáticos de {city}:\n\
         - Temperatura: {temp}°C (Sensação: {feels}°C)\n\
         - Umidade: {humidity}%\n\
         - Vento: {wind} km/h\n\
         \n\
         Gere análises curtas e práticas (máximo 100 palavras cada) para 5 setores:\n\
         1. 🌾 AGRICULTURA: lavouras, irrigação e colheita, com foco na cana-de-açúcar.\n\
         2. 🏥 SAÚDE: riscos respiratórios, hidratação, idosos e crianças.\n\
         3. ⚽ ESPORTES: melhores atividades, horários e precauções.\n\
         4. ⚡ ENERGIA: uso de ar-condicionado e economia doméstica.\n\
         5. ☀️ SOLAR: estimativa de geração fotovoltaica, efeito da umidade, \
         manutenção e pico de produção do dia.\n\
         \n\
         Responda em formato JSON:\n\
         {{\"agriculture\": \"texto\", \"health\": \"texto\", \"sports\": \"texto\", \
         \"energy\": \"texto\", \"solar\": \"texto\"}}",
        city = latest.city,
        temp = fixed(latest.temperature, 1),
        feels = fixed(analysis.feels_like, 1),
        humidity = fixed(latest.humidity, 0),
        wind = fixed(latest.wind_speed, 1),
    )
}
