use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    model::{api::ApiReply, favorite::FavoriteDto},
    server::{
        data::favorite::FavoriteRepository,
        error::{entity::EntityError, Error},
        model::{app::AppState, auth::AuthedProfileId, favorite::Favorite},
        util::time::TimestampInput,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FavoriteQuery {
    pub profile_id: Option<i32>,
    pub item_id: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteFavoriteQuery {
    pub item_id: i32,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateFavoriteRequest {
    pub item_id: i32,
    /// When omitted the favorite is stamped with the current time.
    pub favorited_at: Option<String>,
}

/// Look up a favorite by its composite key, or list by either key component
#[utoipa::path(
    get,
    path = "/api/favorite",
    tag = FAVORITE_TAG,
    params(FavoriteQuery),
    responses(
        (status = 200, description = "Favorite(s) found", body = ApiReply),
        (status = 400, description = "No query parameter provided", body = ApiReply),
        (status = 404, description = "No favorite with that key", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    Query(query): Query<FavoriteQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let repo = FavoriteRepository::new(&state.db);

    // both components select the single composite-key variant
    let favorites = match (query.profile_id, query.item_id) {
        (Some(profile_id), Some(item_id)) => {
            return match repo
                .get_by_profile_id_and_item_id(profile_id, item_id)
                .await?
            {
                Some(favorite) => Ok((
                    StatusCode::OK,
                    Json(ApiReply::data(serde_json::json!(FavoriteDto::from(
                        &favorite
                    )))),
                )
                    .into_response()),
                None => Ok(EntityError::NotFound("favorite").into_response()),
            };
        }
        (Some(profile_id), None) => repo.get_by_profile_id(profile_id).await?,
        (None, Some(item_id)) => repo.get_by_item_id(item_id).await?,
        (None, None) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(ApiReply::message(400, "A query parameter is required")),
            )
                .into_response());
        }
    };

    let dtos: Vec<FavoriteDto> = favorites.iter().map(FavoriteDto::from).collect();

    Ok((StatusCode::OK, Json(ApiReply::data(serde_json::json!(dtos)))).into_response())
}

/// Favorite an item as the authenticated profile
#[utoipa::path(
    post,
    path = "/api/favorite",
    tag = FAVORITE_TAG,
    responses(
        (status = 201, description = "Favorite created", body = ApiReply),
        (status = 400, description = "A field failed validation", body = ApiReply),
        (status = 401, description = "Not authenticated", body = ApiReply),
        (status = 409, description = "Item already favorited", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    AuthedProfileId(profile_id): AuthedProfileId,
    Json(body): Json<CreateFavoriteRequest>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let favorited_at = body.favorited_at.map(TimestampInput::from);
    let favorite = Favorite::new(profile_id, body.item_id, favorited_at)?;

    let created = FavoriteRepository::new(&state.db).create(&favorite).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiReply::with_data(
            201,
            serde_json::json!(FavoriteDto::from(&created)),
        )),
    )
        .into_response())
}

/// Unfavorite an item as the authenticated profile
#[utoipa::path(
    delete,
    path = "/api/favorite",
    tag = FAVORITE_TAG,
    params(DeleteFavoriteQuery),
    responses(
        (status = 200, description = "Favorite deleted", body = ApiReply),
        (status = 400, description = "Invalid key", body = ApiReply),
        (status = 401, description = "Not authenticated", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    AuthedProfileId(profile_id): AuthedProfileId,
    Query(query): Query<DeleteFavoriteQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    // deleting a pair that was never favorited is still OK
    FavoriteRepository::new(&state.db)
        .delete(profile_id, query.item_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiReply::message(200, "Favorite deleted")),
    )
        .into_response())
}
