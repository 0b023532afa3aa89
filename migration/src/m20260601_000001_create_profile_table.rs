use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_auto(Profile::Id))
                    .col(string_len_null(Profile::ActivationToken, 32))
                    .col(string_len_uniq(Profile::Email, 128))
                    .col(string_len(Profile::PasswordHash, 128))
                    .col(string_len(Profile::PasswordSalt, 64))
                    .col(string_len_uniq(Profile::Username, 32))
                    .col(string_len(Profile::Location, 50))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    ActivationToken,
    Email,
    PasswordHash,
    PasswordSalt,
    Username,
    Location,
}
