//! Weather handlers: ingestion, listing, exports, analysis and insights

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::services::weather::{
    verify_signature, CreateWeatherLogInput, WeatherLog, SIGNATURE_HEADER,
};
use crate::services::{InsightsService, ReportingService, WeatherService};
use crate::AppState;
use shared::models::{InsightsResponse, WeatherAnalysis};

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Ingest one observation.
///
/// Public endpoint; when a signing secret is configured the raw body must
/// carry a matching `X-Signature`.
pub async fn create_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<(StatusCode, Json<WeatherLog>)> {
    let secret = state.config.ingest.signing_secret.as_deref().filter(|s| !s.is_empty());
    if let Some(secret) = secret {
        check_signature(secret, &headers, &body)?;
    }

    let input: CreateWeatherLogInput = serde_json::from_slice(&body).map_err(|e| {
        AppError::validation(
            "body",
            &format!("Invalid weather payload: {}", e),
            "Corpo da requisição inválido",
        )
    })?;

    let service = WeatherService::new(state.db.clone());
    let log = service.create_log(input).await?;

    Ok((StatusCode::CREATED, Json(log)))
}

fn check_signature(secret: &str, headers: &HeaderMap, body: &[u8]) -> AppResult<()> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if verify_signature(secret, body, signature) {
        Ok(())
    } else {
        tracing::warn!("Weather ingest signature verification failed");
        Err(AppError::Unauthorized {
            message: "Invalid signature".to_string(),
            message_pt: "Assinatura inválida".to_string(),
        })
    }
}

/// Newest-first weather logs
pub async fn list_logs(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<Vec<WeatherLog>>> {
    let service = WeatherService::new(state.db.clone());
    let logs = service.list_recent(state.config.analysis.list_limit).await?;
    Ok(Json(logs))
}

/// Weather logs as a CSV attachment
pub async fn export_csv(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<impl IntoResponse> {
    let service = WeatherService::new(state.db.clone());
    let logs = service.list_recent(state.config.analysis.list_limit).await?;
    let csv = ReportingService::export_logs_csv(&logs, state.config.analysis.reference_offset()?)?;

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"weather-logs.csv\"",
            ),
        ],
        csv,
    ))
}

/// Weather logs as a spreadsheet attachment
pub async fn export_xlsx(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<impl IntoResponse> {
    let service = WeatherService::new(state.db.clone());
    let logs = service.list_recent(state.config.analysis.list_limit).await?;
    let xlsx =
        ReportingService::export_logs_xlsx(&logs, state.config.analysis.reference_offset()?)?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"weather-logs.xlsx\"",
            ),
        ],
        xlsx,
    ))
}

/// Analysis of the latest insight batch; `null` when there is no data
pub async fn get_analysis(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<Option<WeatherAnalysis>>> {
    Ok(Json(current_analysis(&state).await?))
}

/// Current analysis as a metric/value CSV
pub async fn export_analysis_csv(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<impl IntoResponse> {
    let analysis = current_analysis(&state)
        .await?
        .ok_or_else(|| AppError::NotFound("Dados meteorológicos".to_string()))?;
    let csv = ReportingService::export_analysis_csv(&analysis)?;

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"weather-analysis.csv\"",
            ),
        ],
        csv,
    ))
}

/// Narrative insights, from the language model when configured
pub async fn get_insights(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> AppResult<Json<InsightsResponse>> {
    let service = WeatherService::new(state.db.clone());
    let samples = service
        .recent_samples(state.config.analysis.insight_batch_size)
        .await?;

    let insights = InsightsService::new(&state.config)?;
    Ok(Json(insights.generate(&samples).await))
}

async fn current_analysis(state: &AppState) -> AppResult<Option<WeatherAnalysis>> {
    let service = WeatherService::new(state.db.clone());
    let samples = service
        .recent_samples(state.config.analysis.insight_batch_size)
        .await?;
    Ok(state.config.analysis.analyzer()?.analyze(&samples))
}
