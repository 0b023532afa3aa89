use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::profile::Profile;

/// Transport form of a profile.
///
/// The password hash and salt are credentials, not profile data, and
/// never leave the server.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: Option<i32>,
    pub activation_token: Option<String>,
    pub email: String,
    pub username: String,
    pub location: String,
}

impl From<&Profile> for ProfileDto {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id(),
            activation_token: profile.activation_token().map(str::to_string),
            email: profile.email().to_string(),
            username: profile.username().to_string(),
            location: profile.location().to_string(),
        }
    }
}
