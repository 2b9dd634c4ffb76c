//! Translation of ledger errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use std::fmt::Display;
use tracing::{error, warn};

use crate::error::LedgerError;

/// HTTP status for each error kind
pub fn status_for(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::NotFound { .. } => StatusCode::NOT_FOUND,
        LedgerError::Validation(_) => StatusCode::BAD_REQUEST,
        LedgerError::Cancelled
        | LedgerError::DeadlineExceeded
        | LedgerError::Overflow(_)
        | LedgerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Log `err` and render it as `{"error": "..."}` with the matching status
pub fn error_response(action: &str, err: LedgerError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        error!("Failed to {}: {}", action, err);
    } else {
        warn!("Failed to {}: {}", action, err);
    }

    let body = ErrorResponse {
        error: err.to_string(),
    };
    (status, Json(body)).into_response()
}

/// Render an extractor rejection (bad JSON body, query or path) as a 400
pub fn invalid_request(action: &str, rejection: impl Display) -> Response {
    error_response(action, LedgerError::validation(rejection.to_string()))
}
