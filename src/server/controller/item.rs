use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    model::{api::ApiReply, item::ItemDto},
    server::{
        data::item::ItemRepository,
        error::{entity::EntityError, Error},
        model::{app::AppState, auth::AuthedProfileId, item::Item},
    },
};

pub static ITEM_TAG: &str = "item";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    pub id: Option<i32>,
    pub profile_id: Option<i32>,
    pub description: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub cost: Option<f64>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub cost: f64,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub cost: Option<f64>,
}

/// Look up items by id, owner, substring searches, exact cost, or all
#[utoipa::path(
    get,
    path = "/api/item",
    tag = ITEM_TAG,
    params(ItemQuery),
    responses(
        (status = 200, description = "Item(s) found", body = ApiReply),
        (status = 400, description = "A query parameter failed validation", body = ApiReply),
        (status = 404, description = "No item with that id", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let repo = ItemRepository::new(&state.db);

    // id lookup is the only single-entity variant
    if let Some(id) = query.id {
        return match repo.get_by_id(id).await? {
            Some(item) => Ok((
                StatusCode::OK,
                Json(ApiReply::data(serde_json::json!(ItemDto::from(&item)))),
            )
                .into_response()),
            None => Ok(EntityError::NotFound("item").into_response()),
        };
    }

    let items = if let Some(profile_id) = query.profile_id {
        repo.get_by_profile_id(profile_id).await?
    } else if let Some(description) = query.description.as_deref() {
        repo.search_by_description(description).await?
    } else if let Some(name) = query.name.as_deref() {
        repo.search_by_name(name).await?
    } else if let Some(kind) = query.kind.as_deref() {
        repo.search_by_kind(kind).await?
    } else if let Some(cost) = query.cost {
        repo.get_by_cost(cost).await?
    } else {
        repo.get_all().await?
    };

    let dtos: Vec<ItemDto> = items.iter().map(ItemDto::from).collect();

    Ok((StatusCode::OK, Json(ApiReply::data(serde_json::json!(dtos)))).into_response())
}

/// Create a new item owned by the authenticated profile
#[utoipa::path(
    post,
    path = "/api/item",
    tag = ITEM_TAG,
    responses(
        (status = 201, description = "Item created", body = ApiReply),
        (status = 400, description = "A field failed validation", body = ApiReply),
        (status = 401, description = "Not authenticated", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    AuthedProfileId(profile_id): AuthedProfileId,
    Json(body): Json<CreateItemRequest>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let item = Item::new(
        None,
        profile_id,
        &body.description,
        &body.kind,
        &body.name,
        body.cost,
    )?;

    let created = ItemRepository::new(&state.db).create(&item).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiReply::with_data(
            201,
            serde_json::json!(ItemDto::from(&created)),
        )),
    )
        .into_response())
}

/// Update an item the authenticated profile owns
#[utoipa::path(
    put,
    path = "/api/item/{id}",
    tag = ITEM_TAG,
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item updated", body = ApiReply),
        (status = 400, description = "A field failed validation", body = ApiReply),
        (status = 401, description = "Not authenticated", body = ApiReply),
        (status = 403, description = "Item belongs to another profile", body = ApiReply),
        (status = 404, description = "Item not found", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    AuthedProfileId(profile_id): AuthedProfileId,
    Path(id): Path<i32>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let repo = ItemRepository::new(&state.db);

    let mut item = repo
        .get_by_id(id)
        .await?
        .ok_or(EntityError::NotFound("item"))?;

    if item.profile_id() != profile_id {
        return Ok((
            StatusCode::FORBIDDEN,
            Json(ApiReply::message(403, "Item belongs to another profile")),
        )
            .into_response());
    }

    if let Some(description) = body.description.as_deref() {
        item.set_description(description)?;
    }
    if let Some(kind) = body.kind.as_deref() {
        item.set_kind(kind)?;
    }
    if let Some(name) = body.name.as_deref() {
        item.set_name(name)?;
    }
    if let Some(cost) = body.cost {
        item.set_cost(cost)?;
    }

    let updated = repo.update(&item).await?;

    Ok((
        StatusCode::OK,
        Json(ApiReply::data(serde_json::json!(ItemDto::from(&updated)))),
    )
        .into_response())
}

/// Delete an item the authenticated profile owns
#[utoipa::path(
    delete,
    path = "/api/item/{id}",
    tag = ITEM_TAG,
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = ApiReply),
        (status = 401, description = "Not authenticated", body = ApiReply),
        (status = 403, description = "Item belongs to another profile", body = ApiReply),
        (status = 404, description = "Item not found", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    AuthedProfileId(profile_id): AuthedProfileId,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let repo = ItemRepository::new(&state.db);

    let item = repo
        .get_by_id(id)
        .await?
        .ok_or(EntityError::NotFound("item"))?;

    if item.profile_id() != profile_id {
        return Ok((
            StatusCode::FORBIDDEN,
            Json(ApiReply::message(403, "Item belongs to another profile")),
        )
            .into_response());
    }

    repo.delete(&item).await?;

    Ok((StatusCode::OK, Json(ApiReply::message(200, "Item deleted"))).into_response())
}
