use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::models::catalog_models::ApiResponse;

/// Failures coming out of the contact storage layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to get DB connection: {0}")]
    Pool(#[from] PoolError),
    #[error("Database error: {0}")]
    Query(#[from] DieselError),
}

/// Errors returned by the HTTP handlers. The display text is what the
/// client sees in the `message` field of the response envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody,
    #[error("All fields are required")]
    MissingFields,
    #[error("Failed to save contact information")]
    SaveFailed(#[source] StoreError),
    #[error("Failed to fetch contacts")]
    FetchFailed(#[source] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody | ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::SaveFailed(_) | ApiError::FetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::SaveFailed(e) => tracing::error!("Error inserting contact: {}", e),
            ApiError::FetchFailed(e) => tracing::error!("Error listing contacts: {}", e),
            _ => tracing::debug!("Rejected request: {}", self),
        }
        let status = self.status_code();
        (status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}
