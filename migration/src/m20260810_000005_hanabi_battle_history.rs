use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_hanabi_user::HanabiUser;

static IDX_BATTLE_HISTORY_USER_ID: &str = "idx-hanabi_battle_history-user_id";
static FK_BATTLE_HISTORY_USER_ID: &str = "fk-hanabi_battle_history-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HanabiBattleHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(HanabiBattleHistory::Id))
                    .col(integer(HanabiBattleHistory::UserId))
                    .col(string(HanabiBattleHistory::CharacterName))
                    .col(string(HanabiBattleHistory::OpponentName))
                    .col(string(HanabiBattleHistory::Result))
                    .col(timestamp(HanabiBattleHistory::FoughtAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BATTLE_HISTORY_USER_ID)
                    .table(HanabiBattleHistory::Table)
                    .col(HanabiBattleHistory::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BATTLE_HISTORY_USER_ID)
                    .from_tbl(HanabiBattleHistory::Table)
                    .from_col(HanabiBattleHistory::UserId)
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
                    .name(FK_BATTLE_HISTORY_USER_ID)
                    .table(HanabiBattleHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BATTLE_HISTORY_USER_ID)
                    .table(HanabiBattleHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HanabiBattleHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HanabiBattleHistory {
    Table,
    Id,
    UserId,
    CharacterName,
    OpponentName,
    Result,
    FoughtAt,
}
