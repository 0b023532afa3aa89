use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ApiReply;

/// Why a field was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationReason {
    #[error("must not be empty")]
    Empty,
    #[error("must be at most {0} characters")]
    TooLong(usize),
    #[error("must be a positive id")]
    NotPositive,
    #[error("must be exactly {0} lowercase hexadecimal characters")]
    NotHex(usize),
    #[error("must be a valid email address")]
    InvalidEmail,
    #[error("does not match the YYYY-MM-DD HH:MM:SS timestamp format")]
    InvalidFormat,
    #[error("is not a real calendar date and time")]
    OutOfRange,
    #[error("must not be negative")]
    Negative,
    #[error("must be a finite amount")]
    NotFinite,
}

/// A field-level validation failure naming the offending field.
///
/// Surfaces from the constructor or setter that detected it, before
/// any state changes.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiReply::message(400, self.to_string())),
        )
            .into_response()
    }
}
