use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderName},
};

use super::error::BoardError;
use super::users::UserId;

pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");

/// Caller identity taken from the `x-user-id` header. Whether the account exists is
/// checked by the service handling the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = BoardError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(&USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(BoardError::Unauthenticated)?;

        raw.trim()
            .parse::<u64>()
            .map(|id| Actor(UserId(id)))
            .map_err(|_| BoardError::Unauthenticated)
    }
}
