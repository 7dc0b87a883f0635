//! Report formatter for CSV and spreadsheet exports

use chrono::FixedOffset;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use shared::analysis::fixed;
use shared::models::WeatherAnalysis;

use crate::error::{AppError, AppResult};
use crate::services::weather::WeatherLog;

/// Column headers of the weather log export
pub const LOG_HEADERS: [&str; 5] = [
    "Data/Hora",
    "Cidade",
    "Temperatura (°C)",
    "Velocidade do Vento (km/h)",
    "Umidade (%)",
];

/// Worksheet holding the weather log export
pub const XLSX_SHEET_NAME: &str = "Dados Climáticos";

/// Column widths of the spreadsheet export, in character units
const XLSX_COLUMN_WIDTHS: [f64; 5] = [20.0, 20.0, 18.0, 25.0, 15.0];

/// pt-BR date and time, e.g. `15/01/2025, 12:00:00`
const DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Reporting service
pub struct ReportingService;

impl ReportingService {
    /// Export weather logs as CSV with timestamps rendered in `offset`
    pub fn export_logs_csv(logs: &[WeatherLog], offset: FixedOffset) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(LOG_HEADERS).map_err(csv_error)?;

        for log in logs {
            wtr.write_record([
                log.ts.with_timezone(&offset).format(DATE_FORMAT).to_string(),
                log.city.clone(),
                log.temperature.to_string(),
                log.windspeed.to_string(),
                log.humidity.to_string(),
            ])
            .map_err(csv_error)?;
        }

        into_string(wtr)
    }

    /// Export weather logs as an XLSX workbook with a single sheet.
    ///
    /// Same columns as the CSV export; readings are stored as numbers.
    pub fn export_logs_xlsx(logs: &[WeatherLog], offset: FixedOffset) -> AppResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(XLSX_SHEET_NAME).map_err(xlsx_error)?;

        for (col, (title, width)) in LOG_HEADERS.iter().zip(XLSX_COLUMN_WIDTHS).enumerate() {
            let col = col as u16;
            worksheet
                .write_string_with_format(0, col, *title, &header)
                .map_err(xlsx_error)?;
            worksheet.set_column_width(col, width).map_err(xlsx_error)?;
        }

        for (row, log) in (1u32..).zip(logs) {
            let ts = log.ts.with_timezone(&offset).format(DATE_FORMAT).to_string();
            worksheet.write_string(row, 0, ts).map_err(xlsx_error)?;
            worksheet.write_string(row, 1, log.city.as_str()).map_err(xlsx_error)?;
            worksheet.write_number(row, 2, log.temperature).map_err(xlsx_error)?;
            worksheet.write_number(row, 3, log.windspeed).map_err(xlsx_error)?;
            worksheet.write_number(row, 4, log.humidity).map_err(xlsx_error)?;
        }

        workbook.save_to_buffer().map_err(xlsx_error)
    }

    /// Export the current analysis as a two-column metric/value sheet
    pub fn export_analysis_csv(analysis: &WeatherAnalysis) -> AppResult<String> {
        let stats = &analysis.stats;
        let mut rows: Vec<(String, String)> = vec![
            (
                "Conforto".into(),
                format!("{} ({})", analysis.comfort_score, analysis.comfort_level),
            ),
            ("Classificação do Dia".into(), analysis.day_classification.to_string()),
            ("Sensação Térmica (°C)".into(), fixed(analysis.feels_like, 1).to_string()),
            ("Índice UV".into(), analysis.uv_index.to_string()),
            ("Tendência de Temperatura".into(), analysis.temp_trend.to_string()),
            ("Tendência de Umidade".into(), analysis.humidity_trend.to_string()),
            ("Temperatura Média (°C)".into(), fixed(stats.avg_temp, 1).to_string()),
            ("Temperatura Máxima (°C)".into(), fixed(stats.max_temp, 1).to_string()),
            ("Temperatura Mínima (°C)".into(), fixed(stats.min_temp, 1).to_string()),
            ("Umidade Média (%)".into(), fixed(stats.avg_humidity, 0).to_string()),
            ("Vento Médio (km/h)".into(), fixed(stats.avg_wind, 1).to_string()),
            ("Vento Máximo (km/h)".into(), fixed(stats.max_wind, 1).to_string()),
            ("Variação Térmica (°C)".into(), fixed(stats.temp_variation, 1).to_string()),
            ("Período".into(), if analysis.is_night { "Noite" } else { "Dia" }.into()),
        ];

        if let Some(specialized) = &analysis.specialized {
            rows.extend([
                ("Agricultura".into(), format!(
                    "{} ({})",
                    specialized.agriculture.score, specialized.agriculture.status
                )),
                ("Risco Respiratório".into(), specialized.health.respiratory_risk.to_string()),
                ("Esportes ao Ar Livre".into(), specialized.sports.outdoor_score.to_string()),
                ("Ar-Condicionado".into(), specialized.energy.ac_recommendation.to_string()),
                ("Produção Solar".into(), format!(
                    "{} ({})",
                    specialized.solar.production_score, specialized.solar.production_level
                )),
            ]);
        }

        for alert in &analysis.alerts {
            rows.push((format!("Alerta: {}", alert.title), alert.message.clone()));
        }

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(["Métrica", "Valor"]).map_err(csv_error)?;
        for (metric, value) in rows {
            wtr.write_record([metric, value]).map_err(csv_error)?;
        }

        into_string(wtr)
    }
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Internal(format!("CSV serialization error: {}", e))
}

fn xlsx_error(e: XlsxError) -> AppError {
    AppError::Internal(format!("XLSX serialization error: {}", e))
}

fn into_string(wtr: csv::Writer<Vec<u8>>) -> AppResult<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use shared::models::WeatherSample;
    use shared::WeatherAnalyzer;
    use uuid::Uuid;

    fn log(ts: &str, city: &str, temperature: f64) -> WeatherLog {
        WeatherLog {
            id: Uuid::new_v4(),
            city: city.to_string(),
            ts: DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc),
            temperature,
            humidity: 55.0,
            windspeed: 8.5,
            description: None,
            feels_like: None,
            pressure: None,
            created_at: Utc::now(),
        }
    }

    fn brt() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    #[test]
    fn test_logs_csv_header_and_local_time() {
        let csv = ReportingService::export_logs_csv(
            &[log("2025-01-15T15:00:00Z", "Penápolis", 31.4)],
            brt(),
        )
        .unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Data/Hora,Cidade,Temperatura (°C),Velocidade do Vento (km/h),Umidade (%)"
        );
        assert_eq!(lines.next().unwrap(), "\"15/01/2025, 12:00:00\",Penápolis,31.4,8.5,55");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_logs_csv_quotes_commas_in_city() {
        let csv = ReportingService::export_logs_csv(
            &[log("2025-01-15T02:30:00Z", "São Paulo, SP", 20.0)],
            brt(),
        )
        .unwrap();
        assert!(csv.contains("\"14/01/2025, 23:30:00\",\"São Paulo, SP\",20,8.5,55"));
    }

    #[test]
    fn test_empty_export_has_only_header() {
        let csv = ReportingService::export_logs_csv(&[], brt()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_logs_xlsx_is_a_workbook() {
        let logs = [
            log("2025-01-15T15:00:00Z", "Penápolis", 31.4),
            log("2025-01-15T14:30:00Z", "Penápolis", 30.9),
        ];
        let bytes = ReportingService::export_logs_xlsx(&logs, brt()).unwrap();

        // XLSX is a zip container
        assert!(bytes.starts_with(b"PK\x03\x04"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn test_empty_xlsx_still_has_header_sheet() {
        let bytes = ReportingService::export_logs_xlsx(&[], brt()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_analysis_csv_halves_round_up() {
        let ts = DateTime::parse_from_rfc3339("2025-01-15T15:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let analysis = WeatherAnalyzer::default()
            .analyze(&[WeatherSample::new("Penápolis", ts, 22.25, 44.5, 8.0)])
            .unwrap();

        let csv = ReportingService::export_analysis_csv(&analysis).unwrap();
        assert!(csv.contains("Temperatura Média (°C),22.3"));
        assert!(csv.contains("Umidade Média (%),45"));
    }

    #[test]
    fn test_analysis_csv_lists_metrics() {
        let ts = DateTime::parse_from_rfc3339("2025-01-15T15:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let analysis = WeatherAnalyzer::default()
            .analyze(&[WeatherSample::new("Penápolis", ts, 25.0, 55.0, 8.0)])
            .unwrap();

        let csv = ReportingService::export_analysis_csv(&analysis).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "Métrica,Valor");
        assert!(csv.contains(&format!("Conforto,{} (", analysis.comfort_score)));
        assert!(csv.contains("Temperatura Média (°C),25.0"));
        assert!(csv.contains("Período,Dia"));
        assert!(csv.contains("Produção Solar,"));
    }
}
