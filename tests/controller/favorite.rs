//! Tests for the favorite endpoints.
//!
//! Covers composite-key lookup, the collection lookups by either key
//! component, duplicate-pair conflicts, and the no-op delete.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use contempo::server::{
    controller::favorite::{
        create_favorite, delete_favorite, get_favorite, CreateFavoriteRequest, DeleteFavoriteQuery,
        FavoriteQuery,
    },
    model::auth::AuthedProfileId,
};
use contempo_test_utils::{
    fixtures::seed::{seed_favorite, seed_item, seed_profile},
    prelude::*,
};

use super::read_reply;

#[tokio::test]
async fn get_without_query_parameter_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let query = FavoriteQuery {
        profile_id: None,
        item_id: None,
    };

    let resp = get_favorite(State(test.state()), Query(query))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let reply = read_reply(resp).await;
    assert_eq!(reply.status, 400);

    Ok(())
}

#[tokio::test]
async fn create_then_composite_lookup_round_trips() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    let item = seed_item(&test.db, profile.id).await?;

    let request = CreateFavoriteRequest {
        item_id: item.id,
        favorited_at: None,
    };

    let resp = create_favorite(
        State(test.state()),
        AuthedProfileId(profile.id),
        Json(request),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);

    let query = FavoriteQuery {
        profile_id: Some(profile.id),
        item_id: Some(item.id),
    };
    let resp = get_favorite(State(test.state()), Query(query))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let reply = read_reply(resp).await;
    let data = reply.data.unwrap();
    assert_eq!(data["profile_id"].as_i64().unwrap(), profile.id as i64);
    assert_eq!(data["item_id"].as_i64().unwrap(), item.id as i64);
    assert!(data["favorited_at"].is_i64());

    Ok(())
}

/// An explicit timestamp survives to the reply as its exact epoch
/// millisecond value.
#[tokio::test]
async fn create_with_explicit_timestamp_reports_its_millis() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    let item = seed_item(&test.db, profile.id).await?;

    let request = CreateFavoriteRequest {
        item_id: item.id,
        favorited_at: Some("2026-06-01 12:30:45.250".to_string()),
    };

    let resp = create_favorite(
        State(test.state()),
        AuthedProfileId(profile.id),
        Json(request),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);

    let expected = NaiveDate::from_ymd_opt(2026, 6, 1)
        .unwrap()
        .and_hms_milli_opt(12, 30, 45, 250)
        .unwrap()
        .and_utc()
        .timestamp_millis();

    let reply = read_reply(resp).await;
    assert_eq!(reply.data.unwrap()["favorited_at"].as_i64().unwrap(), expected);

    Ok(())
}

#[tokio::test]
async fn create_with_malformed_timestamp_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    let item = seed_item(&test.db, profile.id).await?;

    let request = CreateFavoriteRequest {
        item_id: item.id,
        favorited_at: Some("June 1st 2026".to_string()),
    };

    let result = create_favorite(
        State(test.state()),
        AuthedProfileId(profile.id),
        Json(request),
    )
    .await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn create_same_pair_twice_is_conflict() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    let item = seed_item(&test.db, profile.id).await?;
    seed_favorite(&test.db, profile.id, item.id).await?;

    let request = CreateFavoriteRequest {
        item_id: item.id,
        favorited_at: None,
    };

    let result = create_favorite(
        State(test.state()),
        AuthedProfileId(profile.id),
        Json(request),
    )
    .await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn composite_lookup_of_absent_pair_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let query = FavoriteQuery {
        profile_id: Some(5),
        item_id: Some(9),
    };

    let resp = get_favorite(State(test.state()), Query(query))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn lookups_by_either_key_component_return_collections() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    let first = seed_item(&test.db, profile.id).await?;
    let second = seed_item(&test.db, profile.id).await?;
    seed_favorite(&test.db, profile.id, first.id).await?;
    seed_favorite(&test.db, profile.id, second.id).await?;

    let query = FavoriteQuery {
        profile_id: Some(profile.id),
        item_id: None,
    };
    let resp = get_favorite(State(test.state()), Query(query))
        .await
        .unwrap()
        .into_response();

    let reply = read_reply(resp).await;
    assert_eq!(reply.data.unwrap().as_array().unwrap().len(), 2);

    let query = FavoriteQuery {
        profile_id: None,
        item_id: Some(first.id),
    };
    let resp = get_favorite(State(test.state()), Query(query))
        .await
        .unwrap()
        .into_response();

    let reply = read_reply(resp).await;
    assert_eq!(reply.data.unwrap().as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn delete_removes_the_pair() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    let item = seed_item(&test.db, profile.id).await?;
    seed_favorite(&test.db, profile.id, item.id).await?;

    let resp = delete_favorite(
        State(test.state()),
        AuthedProfileId(profile.id),
        Query(DeleteFavoriteQuery { item_id: item.id }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let query = FavoriteQuery {
        profile_id: Some(profile.id),
        item_id: Some(item.id),
    };
    let resp = get_favorite(State(test.state()), Query(query))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Unfavoriting a pair that was never favorited still reports OK.
#[tokio::test]
async fn delete_of_absent_pair_is_still_ok() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;

    let resp = delete_favorite(
        State(test.state()),
        AuthedProfileId(profile.id),
        Query(DeleteFavoriteQuery { item_id: 9 }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
