//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type that wraps domain-specific errors and implements `IntoResponse` for automatic
//! error handling in API endpoints.

pub mod config;
pub mod server;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, server::ServerError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Aggregates every error that can occur in the application. `ServerError` handles its
/// own response mapping, the remaining variants are internal failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Business rule or validation failure for a server record.
    ///
    /// Delegates to `ServerError::into_response()` for 400/404/409 mapping.
    #[error(transparent)]
    ServerErr(#[from] ServerError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body missing, not JSON, or not shaped like the expected DTO.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path segment that does not parse as the expected type.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Query string that does not deserialize into the expected parameters.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `ServerErr`, delegated to `ServerError::into_response()`
/// - 4xx - For extractor rejections, keeping axum's status with an `ErrorDto` body
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ServerErr(err) => err.into_response(),
            Self::JsonRejection(rejection) => {
                rejected_request(rejection.status(), rejection.body_text())
            }
            Self::PathRejection(rejection) => {
                rejected_request(rejection.status(), rejection.body_text())
            }
            Self::QueryRejection(rejection) => {
                rejected_request(rejection.status(), rejection.body_text())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn rejected_request(status: StatusCode, message: String) -> Response {
    tracing::debug!("Rejected request ({}): {}", status, message);

    (status, Json(ErrorDto { error: message })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
