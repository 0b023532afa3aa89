use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{classify_db_err, require_key},
    error::Error,
    model::favorite::Favorite,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a favorite for its composite key.
    ///
    /// The key components are already validated positive by the
    /// [`Favorite`] constructor; re-favoriting an existing pair fails
    /// with [`EntityError::DuplicateKey`] from the store's composite
    /// primary key, never from a check-then-insert.
    ///
    /// [`EntityError::DuplicateKey`]: crate::server::error::entity::EntityError::DuplicateKey
    pub async fn create(&self, favorite: &Favorite) -> Result<Favorite, Error> {
        let row = entity::favorite::ActiveModel {
            profile_id: ActiveValue::Set(favorite.profile_id()),
            item_id: ActiveValue::Set(favorite.item_id()),
            favorited_at: ActiveValue::Set(favorite.favorited_at()),
        };

        let inserted = row.insert(self.db).await.map_err(classify_db_err)?;

        Ok(Favorite::from_model(&inserted)?)
    }

    /// Deletes by the full composite key.
    ///
    /// Deleting a pair that was never created is a no-op: OK with
    /// zero rows affected, not an error.
    pub async fn delete(&self, profile_id: i32, item_id: i32) -> Result<DeleteResult, Error> {
        require_key("profile id", profile_id)?;
        require_key("item id", item_id)?;

        Ok(entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::ProfileId.eq(profile_id))
            .filter(entity::favorite::Column::ItemId.eq(item_id))
            .exec(self.db)
            .await?)
    }

    pub async fn get_by_profile_id_and_item_id(
        &self,
        profile_id: i32,
        item_id: i32,
    ) -> Result<Option<Favorite>, Error> {
        require_key("profile id", profile_id)?;
        require_key("item id", item_id)?;

        let row = entity::prelude::Favorite::find_by_id((profile_id, item_id))
            .one(self.db)
            .await?;

        row.as_ref()
            .map(Favorite::from_model)
            .transpose()
            .map_err(Error::from)
    }

    pub async fn get_by_profile_id(&self, profile_id: i32) -> Result<Vec<Favorite>, Error> {
        require_key("profile id", profile_id)?;

        let rows = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::ProfileId.eq(profile_id))
            .order_by_asc(entity::favorite::Column::ItemId)
            .all(self.db)
            .await?;

        materialize_many(&rows)
    }

    pub async fn get_by_item_id(&self, item_id: i32) -> Result<Vec<Favorite>, Error> {
        require_key("item id", item_id)?;

        let rows = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::ItemId.eq(item_id))
            .order_by_asc(entity::favorite::Column::ProfileId)
            .all(self.db)
            .await?;

        materialize_many(&rows)
    }
}

fn materialize_many(rows: &[entity::favorite::Model]) -> Result<Vec<Favorite>, Error> {
    rows.iter()
        .map(Favorite::from_model)
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}
