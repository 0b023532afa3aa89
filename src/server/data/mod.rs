pub mod favorite;
pub mod item;
pub mod profile;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::{entity::EntityError, Error};

/// Classifies a store failure: unique and composite-key collisions
/// become [`EntityError::DuplicateKey`], everything else keeps the
/// original database error as its cause.
pub(crate) fn classify_db_err(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => EntityError::DuplicateKey.into(),
        _ => err.into(),
    }
}

/// Key arguments passed to lookups and deletes are checked before the
/// query is issued.
pub(crate) fn require_key(field: &'static str, id: i32) -> Result<i32, EntityError> {
    if id <= 0 {
        return Err(EntityError::InvalidKey(field));
    }

    Ok(id)
}
