//! Insert helpers seeding rows integration tests depend on.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    constant::{
        TEST_ACTIVATION_TOKEN, TEST_EMAIL, TEST_LOCATION, TEST_PASSWORD_HASH, TEST_PASSWORD_SALT,
        TEST_USERNAME,
    },
    error::TestError,
    fixtures::factory::mock_favorite_model,
};

/// Insert a profile row with the standard test values.
pub async fn seed_profile(db: &DatabaseConnection) -> Result<entity::profile::Model, TestError> {
    let row = entity::profile::ActiveModel {
        activation_token: ActiveValue::Set(Some(TEST_ACTIVATION_TOKEN.to_string())),
        email: ActiveValue::Set(TEST_EMAIL.to_string()),
        password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
        password_salt: ActiveValue::Set(TEST_PASSWORD_SALT.to_string()),
        username: ActiveValue::Set(TEST_USERNAME.to_string()),
        location: ActiveValue::Set(TEST_LOCATION.to_string()),
        ..Default::default()
    };

    Ok(row.insert(db).await?)
}

/// Insert a profile row with a distinct username and derived email, for
/// tests needing more than one profile despite the unique columns.
pub async fn seed_profile_named(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entity::profile::Model, TestError> {
    let row = entity::profile::ActiveModel {
        activation_token: ActiveValue::Set(None),
        email: ActiveValue::Set(format!("{username}@example.com")),
        password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
        password_salt: ActiveValue::Set(TEST_PASSWORD_SALT.to_string()),
        username: ActiveValue::Set(username.to_string()),
        location: ActiveValue::Set(TEST_LOCATION.to_string()),
        ..Default::default()
    };

    Ok(row.insert(db).await?)
}

/// Insert an item row owned by the given profile.
pub async fn seed_item(
    db: &DatabaseConnection,
    profile_id: i32,
) -> Result<entity::item::Model, TestError> {
    let row = entity::item::ActiveModel {
        profile_id: ActiveValue::Set(profile_id),
        description: ActiveValue::Set("Seating".to_string()),
        kind: ActiveValue::Set("Office".to_string()),
        name: ActiveValue::Set("Adjustable Chair".to_string()),
        cost: ActiveValue::Set(120.00),
        ..Default::default()
    };

    Ok(row.insert(db).await?)
}

/// Insert a favorite row linking the given profile and item.
pub async fn seed_favorite(
    db: &DatabaseConnection,
    profile_id: i32,
    item_id: i32,
) -> Result<entity::favorite::Model, TestError> {
    let model = mock_favorite_model(profile_id, item_id);

    let row = entity::favorite::ActiveModel {
        profile_id: ActiveValue::Set(model.profile_id),
        item_id: ActiveValue::Set(model.item_id),
        favorited_at: ActiveValue::Set(model.favorited_at),
    };

    Ok(row.insert(db).await?)
}
