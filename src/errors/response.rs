use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::errors::{store::StoreError, AppError};

// The IntoResponse trait implementation converts AppError into a well-formed HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Storage errors are internal server errors
            AppError::Storage(err) => convert_store_error(err),
        }
    }
}

// Helper function to convert storage errors to responses
fn convert_store_error(err: StoreError) -> Response {
    match err {
        StoreError::Io(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Storage IO error: {}", e),
        )
            .into_response(),

        StoreError::Csv(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Table read/write error: {}", e),
        )
            .into_response(),
    }
}
