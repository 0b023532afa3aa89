//! Factory functions for generating mock database models.
//!
//! Pure functions producing in-memory model instances with standard
//! test values, no database interaction required.

use chrono::Utc;

use crate::constant::{
    TEST_ACTIVATION_TOKEN, TEST_EMAIL, TEST_LOCATION, TEST_PASSWORD_HASH, TEST_PASSWORD_SALT,
    TEST_USERNAME,
};

/// Create a mock profile database model for testing.
///
/// # Arguments
/// - `id` - The profile row id
///
/// # Returns
/// - `entity::profile::Model` - A profile model with standard test data
pub fn mock_profile_model(id: i32) -> entity::profile::Model {
    entity::profile::Model {
        id,
        activation_token: Some(TEST_ACTIVATION_TOKEN.to_string()),
        email: TEST_EMAIL.to_string(),
        password_hash: TEST_PASSWORD_HASH.to_string(),
        password_salt: TEST_PASSWORD_SALT.to_string(),
        username: TEST_USERNAME.to_string(),
        location: TEST_LOCATION.to_string(),
    }
}

/// Create a mock item database model for testing.
///
/// # Arguments
/// - `id` - The item row id
/// - `profile_id` - The owning profile's row id
///
/// # Returns
/// - `entity::item::Model` - An item model with standard test data
pub fn mock_item_model(id: i32, profile_id: i32) -> entity::item::Model {
    entity::item::Model {
        id,
        profile_id,
        description: "Seating".to_string(),
        kind: "Office".to_string(),
        name: "Adjustable Chair".to_string(),
        cost: 120.00,
    }
}

/// Create a mock favorite database model for testing.
///
/// The timestamp is the current time, truncated to whole milliseconds
/// so it survives a transport round trip unchanged.
///
/// # Arguments
/// - `profile_id` - The favoriting profile's row id
/// - `item_id` - The favorited item's row id
///
/// # Returns
/// - `entity::favorite::Model` - A favorite model with standard test data
pub fn mock_favorite_model(profile_id: i32, item_id: i32) -> entity::favorite::Model {
    let now = Utc::now().naive_utc();
    let millis = now.and_utc().timestamp_millis();
    let favorited_at = chrono::DateTime::from_timestamp_millis(millis)
        .map(|at| at.naive_utc())
        .unwrap_or(now);

    entity::favorite::Model {
        profile_id,
        item_id,
        favorited_at,
    }
}
