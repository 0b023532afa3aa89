use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{classify_db_err, require_key},
    error::{entity::EntityError, Error},
    model::item::Item,
    util::validate::{sanitize_text, validate_cost},
};

pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new item and returns it with the store-assigned id.
    pub async fn create(&self, item: &Item) -> Result<Item, Error> {
        if item.id().is_some() {
            return Err(EntityError::AlreadyPersisted.into());
        }

        let row = entity::item::ActiveModel {
            profile_id: ActiveValue::Set(item.profile_id()),
            description: ActiveValue::Set(item.description().to_string()),
            kind: ActiveValue::Set(item.kind().to_string()),
            name: ActiveValue::Set(item.name().to_string()),
            cost: ActiveValue::Set(item.cost()),
            ..Default::default()
        };

        let inserted = row.insert(self.db).await.map_err(classify_db_err)?;

        Ok(Item::from_model(&inserted)?)
    }

    /// Rewrites every non-id column of an already-persisted item.
    pub async fn update(&self, item: &Item) -> Result<Item, Error> {
        let id = item.id().ok_or(EntityError::NotPersisted)?;

        let row = entity::item::ActiveModel {
            id: ActiveValue::Unchanged(id),
            profile_id: ActiveValue::Set(item.profile_id()),
            description: ActiveValue::Set(item.description().to_string()),
            kind: ActiveValue::Set(item.kind().to_string()),
            name: ActiveValue::Set(item.name().to_string()),
            cost: ActiveValue::Set(item.cost()),
        };

        let updated = row.update(self.db).await.map_err(classify_db_err)?;

        Ok(Item::from_model(&updated)?)
    }

    /// Deletes an already-persisted item.
    ///
    /// Returns OK regardless of the row existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, item: &Item) -> Result<DeleteResult, Error> {
        let id = item.id().ok_or(EntityError::NotPersisted)?;

        Ok(entity::prelude::Item::delete_by_id(id).exec(self.db).await?)
    }

    pub async fn get_by_id(&self, item_id: i32) -> Result<Option<Item>, Error> {
        require_key("item id", item_id)?;

        let row = entity::prelude::Item::find_by_id(item_id).one(self.db).await?;

        materialize_one(row)
    }

    pub async fn get_by_profile_id(&self, profile_id: i32) -> Result<Vec<Item>, Error> {
        require_key("profile id", profile_id)?;

        let rows = entity::prelude::Item::find()
            .filter(entity::item::Column::ProfileId.eq(profile_id))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        materialize_many(&rows)
    }

    /// Substring match on the description; the term is bound as a
    /// wildcard-wrapped LIKE parameter, never spliced into the query.
    pub async fn search_by_description(&self, term: &str) -> Result<Vec<Item>, Error> {
        let term = sanitize_text("description", term, 200)?;

        self.search(entity::item::Column::Description, &term).await
    }

    /// Substring match on the name.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Item>, Error> {
        let term = sanitize_text("name", term, 500)?;

        self.search(entity::item::Column::Name, &term).await
    }

    /// Substring match on the type.
    pub async fn search_by_kind(&self, term: &str) -> Result<Vec<Item>, Error> {
        let term = sanitize_text("type", term, 32)?;

        self.search(entity::item::Column::Kind, &term).await
    }

    /// Exact match on the cost.
    pub async fn get_by_cost(&self, cost: f64) -> Result<Vec<Item>, Error> {
        let cost = validate_cost("cost", cost)?;

        let rows = entity::prelude::Item::find()
            .filter(entity::item::Column::Cost.eq(cost))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        materialize_many(&rows)
    }

    pub async fn get_all(&self) -> Result<Vec<Item>, Error> {
        let rows = entity::prelude::Item::find()
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        materialize_many(&rows)
    }

    async fn search(&self, column: entity::item::Column, term: &str) -> Result<Vec<Item>, Error> {
        let rows = entity::prelude::Item::find()
            .filter(column.like(contains_pattern(term)))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        materialize_many(&rows)
    }
}

/// LIKE pattern matching rows whose column contains `term` literally.
/// `%`, `_`, and the escape character itself are escaped so a term
/// carrying them cannot act as a wildcard.
fn contains_pattern(term: &str) -> LikeExpr {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

fn materialize_one(row: Option<entity::item::Model>) -> Result<Option<Item>, Error> {
    row.as_ref()
        .map(Item::from_model)
        .transpose()
        .map_err(Error::from)
}

fn materialize_many(rows: &[entity::item::Model]) -> Result<Vec<Item>, Error> {
    rows.iter()
        .map(Item::from_model)
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}
