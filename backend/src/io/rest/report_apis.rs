//! # REST API for Reports
//!
//! Available reporting periods and fiscal year summaries.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::io::rest::error::{error_response, invalid_request};
use crate::io::rest::mappers::SummaryMapper;
use crate::AppState;

/// Months and fiscal years that hold records
pub async fn get_available_periods(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/records/available");

    let ctx = state.request_context();
    match state.period_service.get_available_periods(&ctx).await {
        Ok(periods) => (StatusCode::OK, Json(SummaryMapper::to_periods_dto(periods))).into_response(),
        Err(e) => error_response("get available periods", e),
    }
}

/// Per-category totals for one fiscal year
pub async fn get_year_summary(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> impl IntoResponse {
    let Path(year) = match path {
        Ok(path) => path,
        Err(rejection) => return invalid_request("get year summary", rejection.body_text()),
    };
    info!("GET /api/records/summary/{}", year);

    let ctx = state.request_context();
    match state.summary_service.get_year_summary(&ctx, year).await {
        Ok(summaries) => (StatusCode::OK, Json(SummaryMapper::to_dto_list(summaries))).into_response(),
        Err(e) => error_response("get year summary", e),
    }
}
