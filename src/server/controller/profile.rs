use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    model::{api::ApiReply, profile::ProfileDto},
    server::{
        data::profile::ProfileRepository,
        error::{entity::EntityError, Error},
        model::{app::AppState, auth::AuthedProfileId, profile::Profile},
    },
};

pub static PROFILE_TAG: &str = "profile";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfileQuery {
    pub id: Option<i32>,
    pub email: Option<String>,
    pub activation_token: Option<String>,
    pub username: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateProfileRequest {
    pub activation_token: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub username: String,
    pub location: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    /// New activation token; an empty string marks the profile activated.
    pub activation_token: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub password_salt: Option<String>,
    pub username: Option<String>,
    pub location: Option<String>,
}

/// Look up a profile by id, email, or activation token, or list profiles by username
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    params(ProfileQuery),
    responses(
        (status = 200, description = "Profile(s) found", body = ApiReply),
        (status = 400, description = "No query parameter provided", body = ApiReply),
        (status = 404, description = "No profile matched", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let repo = ProfileRepository::new(&state.db);

    // exactly one variant is selected, in priority order
    let found = if let Some(id) = query.id {
        repo.get_by_id(id).await?
    } else if let Some(email) = query.email.as_deref() {
        repo.get_by_email(email).await?
    } else if let Some(token) = query.activation_token.as_deref() {
        repo.get_by_activation_token(token).await?
    } else if let Some(username) = query.username.as_deref() {
        let profiles = repo.get_by_username(username).await?;
        let dtos: Vec<ProfileDto> = profiles.iter().map(ProfileDto::from).collect();

        return Ok((StatusCode::OK, Json(ApiReply::data(serde_json::json!(dtos)))).into_response());
    } else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ApiReply::message(400, "A query parameter is required")),
        )
            .into_response());
    };

    match found {
        Some(profile) => Ok((
            StatusCode::OK,
            Json(ApiReply::data(serde_json::json!(ProfileDto::from(&profile)))),
        )
            .into_response()),
        None => Ok(EntityError::NotFound("profile").into_response()),
    }
}

/// Create a new profile
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 201, description = "Profile created", body = ApiReply),
        (status = 400, description = "A field failed validation", body = ApiReply),
        (status = 409, description = "Email or username already taken", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(body): Json<CreateProfileRequest>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let profile = Profile::new(
        None,
        body.activation_token.as_deref(),
        &body.email,
        &body.password_hash,
        &body.password_salt,
        &body.username,
        &body.location,
    )?;

    let created = ProfileRepository::new(&state.db).create(&profile).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiReply::with_data(
            201,
            serde_json::json!(ProfileDto::from(&created)),
        )),
    )
        .into_response())
}

/// Update the authenticated profile
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Profile updated", body = ApiReply),
        (status = 400, description = "A field failed validation", body = ApiReply),
        (status = 401, description = "Not authenticated", body = ApiReply),
        (status = 404, description = "Profile not found", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthedProfileId(profile_id): AuthedProfileId,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let repo = ProfileRepository::new(&state.db);

    let mut profile = repo
        .get_by_id(profile_id)
        .await?
        .ok_or(EntityError::NotFound("profile"))?;

    if let Some(token) = body.activation_token.as_deref() {
        if token.is_empty() {
            profile.set_activation_token(None)?;
        } else {
            profile.set_activation_token(Some(token))?;
        }
    }
    if let Some(email) = body.email.as_deref() {
        profile.set_email(email)?;
    }
    if let Some(password_hash) = body.password_hash.as_deref() {
        profile.set_password_hash(password_hash)?;
    }
    if let Some(password_salt) = body.password_salt.as_deref() {
        profile.set_password_salt(password_salt)?;
    }
    if let Some(username) = body.username.as_deref() {
        profile.set_username(username)?;
    }
    if let Some(location) = body.location.as_deref() {
        profile.set_location(location)?;
    }

    let updated = repo.update(&profile).await?;

    Ok((
        StatusCode::OK,
        Json(ApiReply::data(serde_json::json!(ProfileDto::from(&updated)))),
    )
        .into_response())
}

/// Delete the authenticated profile
#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Profile deleted", body = ApiReply),
        (status = 401, description = "Not authenticated", body = ApiReply),
        (status = 404, description = "Profile not found", body = ApiReply),
        (status = 500, description = "Internal server error", body = ApiReply)
    ),
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    AuthedProfileId(profile_id): AuthedProfileId,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let repo = ProfileRepository::new(&state.db);

    let profile = repo
        .get_by_id(profile_id)
        .await?
        .ok_or(EntityError::NotFound("profile"))?;

    repo.delete(&profile).await?;

    Ok((
        StatusCode::OK,
        Json(ApiReply::message(200, "Profile deleted")),
    )
        .into_response())
}
