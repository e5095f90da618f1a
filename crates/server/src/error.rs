//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pmtct_core::OperationOutcome;

use crate::openmrs::ClientError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// OpenMRS failed or answered with something unusable
    BadGateway(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, outcome) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, OperationOutcome::not_found(&msg)),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, OperationOutcome::invalid(&msg)),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, OperationOutcome::upstream(&msg)),
        };

        (status, Json(outcome)).into_response()
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        if let ClientError::InvalidSegment(_) = err {
            return AppError::BadRequest(err.to_string());
        }

        // Display of a status error leaves out the upstream body
        match err.status() {
            Some(StatusCode::NOT_FOUND) => AppError::NotFound(err.to_string()),
            Some(StatusCode::BAD_REQUEST) => AppError::BadRequest(err.to_string()),
            _ => {
                tracing::error!(error = %err, "OpenMRS call failed");
                AppError::BadGateway(err.to_string())
            }
        }
    }
}
