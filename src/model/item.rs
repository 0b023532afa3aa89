use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::item::Item;

/// Transport form of an item.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: Option<i32>,
    pub profile_id: i32,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub cost: f64,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id(),
            profile_id: item.profile_id(),
            description: item.description().to_string(),
            kind: item.kind().to_string(),
            name: item.name().to_string(),
            cost: item.cost(),
        }
    }
}
