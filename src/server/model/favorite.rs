use chrono::{NaiveDateTime, Utc};

use crate::server::{
    error::validate::ValidationError,
    util::{
        time::{validate_timestamp, TimestampInput},
        validate::require_positive,
    },
};

/// A validated favorite: the association between a profile and an
/// item, stamped with when it was favorited.
///
/// The (profile_id, item_id) pair is the composite identity; there is
/// no surrogate id. The key components are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    profile_id: i32,
    item_id: i32,
    favorited_at: NaiveDateTime,
}

impl Favorite {
    /// Validates both key components and the optional timestamp; a
    /// missing timestamp defaults to the current time.
    pub fn new(
        profile_id: i32,
        item_id: i32,
        favorited_at: Option<TimestampInput>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            profile_id: require_positive("profile_id", profile_id)?,
            item_id: require_positive("item_id", item_id)?,
            favorited_at: match favorited_at {
                Some(input) => validate_timestamp("favorited_at", input)?,
                None => Utc::now().naive_utc(),
            },
        })
    }

    /// Materializes a stored row back into a validated favorite.
    pub fn from_model(model: &entity::favorite::Model) -> Result<Self, ValidationError> {
        Self::new(
            model.profile_id,
            model.item_id,
            Some(model.favorited_at.into()),
        )
    }

    pub fn profile_id(&self) -> i32 {
        self.profile_id
    }

    pub fn item_id(&self) -> i32 {
        self.item_id
    }

    pub fn favorited_at(&self) -> NaiveDateTime {
        self.favorited_at
    }
}
