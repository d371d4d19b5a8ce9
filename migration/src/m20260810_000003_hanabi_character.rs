use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_hanabi_user::HanabiUser;

static IDX_CHARACTER_USER_ID: &str = "idx-hanabi_character-user_id";
static FK_CHARACTER_USER_ID: &str = "fk-hanabi_character-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HanabiCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(HanabiCharacter::Id))
                    .col(integer(HanabiCharacter::UserId))
                    .col(string(HanabiCharacter::Name))
                    .col(string(HanabiCharacter::Element))
                    .col(integer(HanabiCharacter::Potential))
                    .col(integer(HanabiCharacter::Level))
                    .col(integer(HanabiCharacter::Xp))
                    .col(integer(HanabiCharacter::Attack))
                    .col(integer(HanabiCharacter::HitPoints))
                    .col(integer(HanabiCharacter::CritChance))
                    .col(timestamp(HanabiCharacter::CreatedAt))
                    .col(timestamp(HanabiCharacter::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_USER_ID)
                    .table(HanabiCharacter::Table)
                    .col(HanabiCharacter::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_USER_ID)
                    .from_tbl(HanabiCharacter::Table)
                    .from_col(HanabiCharacter::UserId)
                    .to_tbl(HanabiUser::Table)
                    .to_col(HanabiUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTER_USER_ID)
                    .table(HanabiCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_USER_ID)
                    .table(HanabiCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HanabiCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HanabiCharacter {
    Table,
    Id,
    UserId,
    Name,
    Element,
    Potential,
    Level,
    Xp,
    Attack,
    HitPoints,
    CritChance,
    CreatedAt,
    UpdatedAt,
}
