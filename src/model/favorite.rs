use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::{model::favorite::Favorite, util::time::epoch_millis};

/// Transport form of a favorite.
///
/// The timestamp crosses the wire as integer milliseconds since the
/// Unix epoch; only the stored form is a structured timestamp.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub profile_id: i32,
    pub item_id: i32,
    pub favorited_at: i64,
}

impl From<&Favorite> for FavoriteDto {
    fn from(favorite: &Favorite) -> Self {
        Self {
            profile_id: favorite.profile_id(),
            item_id: favorite.item_id(),
            favorited_at: epoch_millis(favorite.favorited_at()),
        }
    }
}
