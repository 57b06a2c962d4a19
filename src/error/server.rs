use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Server column carrying a uniqueness or non-blank requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerField {
    Name,
    Address,
}

impl fmt::Display for ServerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Address => f.write_str("address"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    /// No server exists with the requested ID.
    ///
    /// Results in a 404 Not Found response.
    #[error("Server not found with id: {id}")]
    NotFound { id: i64 },

    /// Another server already uses this name or address.
    ///
    /// Results in a 400 Bad Request response.
    #[error("A server with {field} '{value}' already exists")]
    UniquenessViolation { field: ServerField, value: String },

    /// Delete attempted while the server is running.
    ///
    /// Results in a 409 Conflict response. The record is left unchanged.
    #[error("Cannot delete a running server. Stop the server first.")]
    InvalidState { id: i64 },

    /// A required field was empty or whitespace.
    ///
    /// Raised at the controller boundary before the service is reached. Results in a
    /// 400 Bad Request response.
    #[error("Server {field} is required")]
    Validation { field: ServerField },
}

/// Converts server errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `UniquenessViolation` and `Validation`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `InvalidState`
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UniquenessViolation { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidState { .. } => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
