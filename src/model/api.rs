use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The JSON envelope returned by every API endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiReply {
    /// HTTP status code mirrored into the body
    pub status: u16,
    /// The requested entity or array of entities, when the request produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<serde_json::Value>,
    /// A human-readable outcome, when no entity is returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiReply {
    /// A 200 reply carrying an entity or array.
    pub fn data(data: serde_json::Value) -> Self {
        Self::with_data(200, data)
    }

    pub fn with_data(status: u16, data: serde_json::Value) -> Self {
        Self {
            status,
            data: Some(data),
            message: None,
        }
    }

    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            message: Some(message.into()),
        }
    }
}
