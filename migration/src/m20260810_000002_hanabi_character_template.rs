use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HanabiCharacterTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(HanabiCharacterTemplate::Id))
                    .col(string_uniq(HanabiCharacterTemplate::Name))
                    .col(string(HanabiCharacterTemplate::Element))
                    .col(integer(HanabiCharacterTemplate::Potential))
                    .col(string_null(HanabiCharacterTemplate::ImagePath))
                    .col(timestamp(HanabiCharacterTemplate::CreatedAt))
                    .col(timestamp(HanabiCharacterTemplate::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(HanabiCharacterTemplate::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HanabiCharacterTemplate {
    Table,
    Id,
    Name,
    Element,
    Potential,
    ImagePath,
    CreatedAt,
    UpdatedAt,
}
