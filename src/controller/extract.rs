//! Request extractors that reject with `AppError` instead of axum's plain-text bodies.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// Server ID taken from the `{id}` path segment.
///
/// A segment that is not an integer is rejected with a 400 `ErrorDto`.
pub struct ServerId(pub i64);

impl<S> FromRequestParts<S> for ServerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;

        Ok(Self(id))
    }
}
