//! Error types for the favorites API.
//!
//! Validation failures and entity lifecycle violations carry their own
//! HTTP mappings; everything else (notably database errors) falls back
//! to a logged 500 with a generic body so store internals never leak
//! to clients.

pub mod config;
pub mod entity;
pub mod validate;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ApiReply,
    server::error::{config::ConfigError, entity::EntityError, validate::ValidationError},
};

/// Main error type for the favorites API.
///
/// Aggregates the domain error types and database errors into a single
/// unified type so repository and controller code can use `?`
/// throughout. Database errors keep their original cause.
#[derive(Error, Debug)]
pub enum Error {
    /// A field failed validation (client-fixable).
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// An entity lifecycle or key contract was violated.
    #[error(transparent)]
    Entity(#[from] EntityError),
    /// Required configuration was missing.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The backing store reported a failure.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => err.into_response(),
            Self::Entity(err) => err.into_response(),
            Self::Config(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for debugging and returns a generic message to
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiReply::message(500, "Internal server error")),
        )
            .into_response()
    }
}
