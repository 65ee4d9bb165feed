//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failures raised by the data-access layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("entity with such id does not exist")]
    NotFound,
    #[error("expected exactly one row, got {0}")]
    TooManyRows(usize),
    #[error("no fields to update")]
    NoFieldsToUpdate,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    /// A store failure annotated with the service operation that hit it.
    #[error("{context}: {source}")]
    Service {
        context: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    pub fn service(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Service { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Service {
                source: StoreError::NotFound,
                ..
            } => StatusCode::NOT_FOUND,
            AppError::Service { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::service("error deleting movie")(StoreError::NotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "error deleting movie: entity with such id does not exist"
        );
    }

    #[test]
    fn other_store_errors_map_to_422() {
        let err = AppError::service("error updating movie")(StoreError::NoFieldsToUpdate);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "error updating movie: no fields to update");

        let err = AppError::service("error fetching by id")(StoreError::Db(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn bad_request_keeps_message() {
        let err = AppError::BadRequest("expected value at line 1 column 1".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "expected value at line 1 column 1");
    }
}
