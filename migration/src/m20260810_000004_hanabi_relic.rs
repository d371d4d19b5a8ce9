use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_hanabi_user::HanabiUser;

static IDX_RELIC_USER_ID: &str = "idx-hanabi_relic-user_id";
static FK_RELIC_USER_ID: &str = "fk-hanabi_relic-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HanabiRelic::Table)
                    .if_not_exists()
                    .col(pk_auto(HanabiRelic::Id))
                    .col(integer(HanabiRelic::UserId))
                    .col(string(HanabiRelic::Name))
                    .col(string(HanabiRelic::Quality))
                    .col(integer(HanabiRelic::Level))
                    .col(integer(HanabiRelic::Awaken))
                    .col(integer(HanabiRelic::AttackBoost))
                    .col(integer(HanabiRelic::HitPointsBoost))
                    .col(integer(HanabiRelic::CritBoost))
                    .col(string_null(HanabiRelic::AssignedTo))
                    .col(string_null(HanabiRelic::ImagePath))
                    .col(timestamp(HanabiRelic::CreatedAt))
                    .col(timestamp(HanabiRelic::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RELIC_USER_ID)
                    .table(HanabiRelic::Table)
                    .col(HanabiRelic::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RELIC_USER_ID)
                    .from_tbl(HanabiRelic::Table)
                    .from_col(HanabiRelic::UserId)
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
                    .name(FK_RELIC_USER_ID)
                    .table(HanabiRelic::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RELIC_USER_ID)
                    .table(HanabiRelic::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HanabiRelic::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HanabiRelic {
    Table,
    Id,
    UserId,
    Name,
    Quality,
    Level,
    Awaken,
    AttackBoost,
    HitPointsBoost,
    CritBoost,
    AssignedTo,
    ImagePath,
    CreatedAt,
    UpdatedAt,
}
