use sea_orm_migration::{prelude::*, schema::*};

static IDX_USER_DISCORD_ID: &str = "idx-hanabi_user-discord_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HanabiUser::Table)
                    .if_not_exists()
                    .col(pk_auto(HanabiUser::Id))
                    .col(big_integer_uniq(HanabiUser::DiscordId))
                    .col(string(HanabiUser::Name))
                    .col(big_integer(HanabiUser::Gold))
                    .col(big_integer(HanabiUser::Gems))
                    .col(big_integer(HanabiUser::Diamonds))
                    .col(big_integer(HanabiUser::ResonanceCrystals))
                    .col(integer(HanabiUser::Level))
                    .col(integer(HanabiUser::Xp))
                    .col(integer(HanabiUser::Affection))
                    .col(integer(HanabiUser::SummonCount))
                    .col(integer(HanabiUser::PityCounter))
                    .col(timestamp_null(HanabiUser::LastTrainedAt))
                    .col(timestamp_null(HanabiUser::LastBondedAt))
                    .col(timestamp(HanabiUser::CreatedAt))
                    .col(timestamp(HanabiUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_DISCORD_ID)
                    .table(HanabiUser::Table)
                    .col(HanabiUser::DiscordId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_DISCORD_ID)
                    .table(HanabiUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HanabiUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum HanabiUser {
    Table,
    Id,
    DiscordId,
    Name,
    Gold,
    Gems,
    Diamonds,
    ResonanceCrystals,
    Level,
    Xp,
    Affection,
    SummonCount,
    PityCounter,
    LastTrainedAt,
    LastBondedAt,
    CreatedAt,
    UpdatedAt,
}
