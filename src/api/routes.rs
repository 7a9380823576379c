//! Report route handlers

use super::error::ApiError;
use super::request::ReportRequest;
use super::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;

/// Header that asks the highest-priority provider to simulate a failure
pub const FORCE_ERROR_HEADER: &str = "x-force-error";

#[derive(Debug, Serialize)]
pub struct CreateReportResponse {
    pub id: String,
    pub status: &'static str,
    pub provider: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateReportResponse {
    pub id: String,
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub provider_id: String,
    pub report_id: String,
    pub date: String,
    pub weather: String,
    pub description: String,
    pub workers: Vec<String>,
}

fn force_error(headers: &HeaderMap) -> bool {
    headers
        .get(FORCE_ERROR_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == "true")
}

pub async fn create_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateReportResponse>), ApiError> {
    let Json(request) = body?;
    let report = request.into_report().map_err(ApiError::Validation)?;

    let stored = state
        .service
        .create_with_fallback(&report, force_error(&headers))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReportResponse {
            id: stored.id,
            status: "created",
            provider: stored.provider_name.to_string(),
        }),
    ))
}

pub async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<UpdateReportResponse>, ApiError> {
    let Json(request) = body?;
    let report = request.into_report().map_err(ApiError::Validation)?;

    let stored = state.service.update_report(&id, &report).await?;

    Ok(Json(UpdateReportResponse {
        id: stored.id,
        status: "updated",
        message: "Report updated successfully".to_string(),
    }))
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let report = state.service.get_report(&id).await?;

    Ok(Json(ReportResponse {
        id,
        provider_id: report.provider_record_id,
        report_id: report.report_id,
        date: report.date,
        weather: report.weather,
        description: report.description,
        workers: report.workers,
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
