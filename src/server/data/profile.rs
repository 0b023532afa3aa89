use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{classify_db_err, require_key},
    error::{entity::EntityError, Error},
    model::profile::Profile,
    util::validate::{require_hex, sanitize_text},
};

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new profile and returns it with the store-assigned id.
    ///
    /// Fails with [`EntityError::AlreadyPersisted`] when the profile
    /// already carries an id, and [`EntityError::DuplicateKey`] when
    /// the email or username collides with an existing row.
    pub async fn create(&self, profile: &Profile) -> Result<Profile, Error> {
        if profile.id().is_some() {
            return Err(EntityError::AlreadyPersisted.into());
        }

        let row = entity::profile::ActiveModel {
            activation_token: ActiveValue::Set(profile.activation_token().map(str::to_string)),
            email: ActiveValue::Set(profile.email().to_string()),
            password_hash: ActiveValue::Set(profile.password_hash().to_string()),
            password_salt: ActiveValue::Set(profile.password_salt().to_string()),
            username: ActiveValue::Set(profile.username().to_string()),
            location: ActiveValue::Set(profile.location().to_string()),
            ..Default::default()
        };

        let inserted = row.insert(self.db).await.map_err(classify_db_err)?;

        Ok(Profile::from_model(&inserted)?)
    }

    /// Rewrites every non-id column of an already-persisted profile.
    pub async fn update(&self, profile: &Profile) -> Result<Profile, Error> {
        let id = profile.id().ok_or(EntityError::NotPersisted)?;

        let row = entity::profile::ActiveModel {
            id: ActiveValue::Unchanged(id),
            activation_token: ActiveValue::Set(profile.activation_token().map(str::to_string)),
            email: ActiveValue::Set(profile.email().to_string()),
            password_hash: ActiveValue::Set(profile.password_hash().to_string()),
            password_salt: ActiveValue::Set(profile.password_salt().to_string()),
            username: ActiveValue::Set(profile.username().to_string()),
            location: ActiveValue::Set(profile.location().to_string()),
        };

        let updated = row.update(self.db).await.map_err(classify_db_err)?;

        Ok(Profile::from_model(&updated)?)
    }

    /// Deletes an already-persisted profile.
    ///
    /// Returns OK regardless of the row existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, profile: &Profile) -> Result<DeleteResult, Error> {
        let id = profile.id().ok_or(EntityError::NotPersisted)?;

        Ok(entity::prelude::Profile::delete_by_id(id)
            .exec(self.db)
            .await?)
    }

    pub async fn get_by_id(&self, profile_id: i32) -> Result<Option<Profile>, Error> {
        require_key("profile id", profile_id)?;

        let row = entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await?;

        materialize_one(row)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<Profile>, Error> {
        let email = sanitize_text("email", email, 128)?;

        let row = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Email.eq(email))
            .one(self.db)
            .await?;

        materialize_one(row)
    }

    /// The token argument is held to the same 32-character lowercase
    /// hex contract as the stored field.
    pub async fn get_by_activation_token(&self, token: &str) -> Result<Option<Profile>, Error> {
        let token = require_hex("activation_token", token, 32)?;

        let row = entity::prelude::Profile::find()
            .filter(entity::profile::Column::ActivationToken.eq(token))
            .one(self.db)
            .await?;

        materialize_one(row)
    }

    /// Username uniqueness is store-enforced, but the lookup layer
    /// still returns an ordered collection.
    pub async fn get_by_username(&self, username: &str) -> Result<Vec<Profile>, Error> {
        let username = sanitize_text("username", username, 32)?;

        let rows = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Username.eq(username))
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await?;

        materialize_many(&rows)
    }
}

/// The row-materialization boundary: a stored row that fails field
/// validation surfaces as a validation error rather than a silently
/// partial entity.
fn materialize_one(row: Option<entity::profile::Model>) -> Result<Option<Profile>, Error> {
    row.as_ref()
        .map(Profile::from_model)
        .transpose()
        .map_err(Error::from)
}

fn materialize_many(rows: &[entity::profile::Model]) -> Result<Vec<Profile>, Error> {
    rows.iter()
        .map(Profile::from_model)
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}
