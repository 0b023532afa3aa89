use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ApiReply;

/// Entity lifecycle and key contract violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntityError {
    /// Create was called on an entity that already has an id.
    #[error("cannot create an entity that is already persisted")]
    AlreadyPersisted,
    /// Update or delete was called on an entity with no id.
    #[error("cannot modify an entity that has not been persisted")]
    NotPersisted,
    /// A key argument was not a positive integer.
    #[error("{0} is not a positive key")]
    InvalidKey(&'static str),
    /// The store rejected a unique or composite-key collision.
    #[error("a record with this key already exists")]
    DuplicateKey,
    /// A lookup on a required id matched nothing.
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl IntoResponse for EntityError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyPersisted | Self::DuplicateKey => StatusCode::CONFLICT,
            Self::NotPersisted | Self::InvalidKey(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ApiReply::message(status.as_u16(), self.to_string())),
        )
            .into_response()
    }
}
