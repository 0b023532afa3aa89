//! Tests for the item endpoints.
//!
//! Covers each lookup variant, creation against the authenticated
//! profile, and the ownership checks guarding update and delete.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use contempo::server::{
    controller::item::{
        create_item, delete_item, get_item, update_item, CreateItemRequest, ItemQuery,
        UpdateItemRequest,
    },
    model::auth::AuthedProfileId,
};
use contempo_test_utils::{
    fixtures::seed::{seed_item, seed_profile, seed_profile_named},
    prelude::*,
};

use super::read_reply;

fn empty_query() -> ItemQuery {
    ItemQuery {
        id: None,
        profile_id: None,
        description: None,
        name: None,
        kind: None,
        cost: None,
    }
}

fn empty_update() -> UpdateItemRequest {
    UpdateItemRequest {
        description: None,
        kind: None,
        name: None,
        cost: None,
    }
}

#[tokio::test]
async fn get_without_query_parameter_lists_every_item() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    seed_item(&test.db, profile.id).await?;
    seed_item(&test.db, profile.id).await?;

    let resp = get_item(State(test.state()), Query(empty_query()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let reply = read_reply(resp).await;
    assert_eq!(reply.data.unwrap().as_array().unwrap().len(), 2);

    Ok(())
}

#[tokio::test]
async fn create_assigns_id_and_reports_the_type_field() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;

    let request = CreateItemRequest {
        description: "A standing desk in oak".to_string(),
        kind: "Office".to_string(),
        name: "Standing Desk".to_string(),
        cost: 499.99,
    };

    let resp = create_item(
        State(test.state()),
        AuthedProfileId(profile.id),
        Json(request),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);

    let reply = read_reply(resp).await;
    assert_eq!(reply.status, 201);

    let data = reply.data.unwrap();
    assert!(data["id"].as_i64().unwrap() > 0);
    assert_eq!(data["profile_id"].as_i64().unwrap(), profile.id as i64);
    assert_eq!(data["type"], "Office");
    assert_eq!(data["cost"].as_f64().unwrap(), 499.99);

    Ok(())
}

#[tokio::test]
async fn create_with_negative_cost_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;

    let request = CreateItemRequest {
        description: "Seating".to_string(),
        kind: "Office".to_string(),
        name: "Adjustable Chair".to_string(),
        cost: -1.00,
    };

    let result = create_item(
        State(test.state()),
        AuthedProfileId(profile.id),
        Json(request),
    )
    .await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let reply = read_reply(resp).await;
    assert!(reply.message.unwrap().contains("cost"));

    Ok(())
}

#[tokio::test]
async fn get_by_id_finds_the_item_or_reports_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    let item = seed_item(&test.db, profile.id).await?;

    let query = ItemQuery {
        id: Some(item.id),
        ..empty_query()
    };
    let resp = get_item(State(test.state()), Query(query))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let reply = read_reply(resp).await;
    assert_eq!(reply.data.unwrap()["id"].as_i64().unwrap(), item.id as i64);

    let query = ItemQuery {
        id: Some(item.id + 1),
        ..empty_query()
    };
    let resp = get_item(State(test.state()), Query(query))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn search_variants_return_matching_collections() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    let item = seed_item(&test.db, profile.id).await?;

    let by_name = ItemQuery {
        name: Some("Chair".to_string()),
        ..empty_query()
    };
    let by_kind = ItemQuery {
        kind: Some("ffi".to_string()),
        ..empty_query()
    };
    let by_cost = ItemQuery {
        cost: Some(120.00),
        ..empty_query()
    };

    for query in [by_name, by_kind, by_cost] {
        let resp = get_item(State(test.state()), Query(query))
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);

        let reply = read_reply(resp).await;
        let data = reply.data.unwrap();
        let items = data.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"].as_i64().unwrap(), item.id as i64);
    }

    let nothing = ItemQuery {
        name: Some("piano".to_string()),
        ..empty_query()
    };
    let resp = get_item(State(test.state()), Query(nothing))
        .await
        .unwrap()
        .into_response();

    let reply = read_reply(resp).await;
    assert!(reply.data.unwrap().as_array().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn update_rewrites_fields_for_the_owner() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    let item = seed_item(&test.db, profile.id).await?;

    let request = UpdateItemRequest {
        name: Some("Reclining Chair".to_string()),
        cost: Some(89.50),
        ..empty_update()
    };

    let resp = update_item(
        State(test.state()),
        AuthedProfileId(profile.id),
        Path(item.id),
        Json(request),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let reply = read_reply(resp).await;
    let data = reply.data.unwrap();
    assert_eq!(data["name"], "Reclining Chair");
    assert_eq!(data["cost"].as_f64().unwrap(), 89.50);

    Ok(())
}

#[tokio::test]
async fn update_by_another_profile_is_forbidden() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let owner = seed_profile(&test.db).await?;
    let other = seed_profile_named(&test.db, "sancho").await?;
    let item = seed_item(&test.db, owner.id).await?;

    let resp = update_item(
        State(test.state()),
        AuthedProfileId(other.id),
        Path(item.id),
        Json(empty_update()),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn update_of_absent_item_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;

    let result = update_item(
        State(test.state()),
        AuthedProfileId(profile.id),
        Path(99),
        Json(empty_update()),
    )
    .await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn delete_removes_an_owned_item() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let profile = seed_profile(&test.db).await?;
    let item = seed_item(&test.db, profile.id).await?;

    let resp = delete_item(
        State(test.state()),
        AuthedProfileId(profile.id),
        Path(item.id),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let query = ItemQuery {
        id: Some(item.id),
        ..empty_query()
    };
    let resp = get_item(State(test.state()), Query(query))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn delete_by_another_profile_is_forbidden() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let owner = seed_profile(&test.db).await?;
    let other = seed_profile_named(&test.db, "sancho").await?;
    let item = seed_item(&test.db, owner.id).await?;

    let resp = delete_item(
        State(test.state()),
        AuthedProfileId(other.id),
        Path(item.id),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
