use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::model::api::ApiReply;

/// Header carrying the authenticated profile id, set by the
/// session-terminating proxy in front of this service.
pub static PROFILE_ID_HEADER: &str = "x-profile-id";

/// The profile acting on the current request.
///
/// Handlers receive the authenticated identity as an explicit value
/// rather than reading ambient session state; the entity layer never
/// sees it at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthedProfileId(pub i32);

impl<S> FromRequestParts<S> for AuthedProfileId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let profile_id = parts
            .headers
            .get(PROFILE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<i32>().ok())
            .filter(|id| *id > 0);

        match profile_id {
            Some(id) => Ok(AuthedProfileId(id)),
            None => {
                tracing::debug!("Request rejected: no valid {} header", PROFILE_ID_HEADER);

                Err((
                    StatusCode::UNAUTHORIZED,
                    Json(ApiReply::message(401, "Not authenticated")),
                )
                    .into_response())
            }
        }
    }
}
