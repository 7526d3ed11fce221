//! Path extractor for the numeric user identifier.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// `{id}` path segment parsed as a user ID.
///
/// A non-numeric segment is rejected with the standard 400 error body
/// instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("Invalid user ID"))?;

        raw.parse()
            .map(UserId)
            .map_err(|_| AppError::bad_request("Invalid user ID"))
    }
}
