use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260601_000001_create_profile_table::Profile, m20260601_000002_create_item_table::Item,
};

static FK_FAVORITE_PROFILE_ID: &str = "fk_favorite_profile_id";
static FK_FAVORITE_ITEM_ID: &str = "fk_favorite_item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(integer(Favorite::ProfileId))
                    .col(integer(Favorite::ItemId))
                    .col(timestamp(Favorite::FavoritedAt))
                    // composite primary key: a profile favorites an item at most once
                    .primary_key(
                        Index::create()
                            .name("pk_favorite")
                            .col(Favorite::ProfileId)
                            .col(Favorite::ItemId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PROFILE_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::ProfileId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_ITEM_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::ItemId)
                    .to_tbl(Item::Table)
                    .to_col(Item::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_ITEM_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PROFILE_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    ProfileId,
    ItemId,
    FavoritedAt,
}
