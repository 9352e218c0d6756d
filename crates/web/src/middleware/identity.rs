use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::WebError;

/// Caller identity resolved by the upstream authentication gateway,
/// propagated as an `X-User-Id` header. Routes that act on behalf of a
/// user (registration, score submission, judge self-service) extract
/// this; authorization against the judge pool happens in storage.
#[derive(Debug, Clone, Copy)]
pub struct Identity(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .map(Identity)
            .ok_or(WebError::Unauthorized)
    }
}
