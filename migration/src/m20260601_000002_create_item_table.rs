use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_create_profile_table::Profile;

static FK_ITEM_PROFILE_ID: &str = "fk_item_profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(integer(Item::ProfileId))
                    .col(string_len(Item::Description, 200))
                    .col(string_len(Item::ItemType, 32))
                    .col(string_len(Item::Name, 500))
                    .col(double(Item::Cost))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_PROFILE_ID)
                    .from_tbl(Item::Table)
                    .from_col(Item::ProfileId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_PROFILE_ID)
                    .table(Item::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    Id,
    ProfileId,
    Description,
    ItemType,
    Name,
    Cost,
}
