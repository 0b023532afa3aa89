mod favorite;
mod item;

use axum::{body::to_bytes, response::Response};
use contempo::model::api::ApiReply;

/// Reads a response body back into the reply envelope.
pub async fn read_reply(resp: Response) -> ApiReply {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
