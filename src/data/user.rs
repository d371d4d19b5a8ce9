use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Gold balance granted to a freshly created player.
pub const STARTING_GOLD: i64 = 500;

/// Gem balance granted to a freshly created player.
pub const STARTING_GEMS: i64 = 50;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a player row by Discord id
    pub async fn get_by_discord_id(
        &self,
        discord_id: i64,
    ) -> Result<Option<entity::hanabi_user::Model>, DbErr> {
        entity::prelude::HanabiUser::find()
            .filter(entity::hanabi_user::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await
    }

    /// Gets a player row by its primary key
    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::hanabi_user::Model>, DbErr> {
        entity::prelude::HanabiUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets the player row for a Discord id, creating it with starting
    /// balances on first interaction
    pub async fn get_or_create(
        &self,
        discord_id: i64,
        name: &str,
    ) -> Result<entity::hanabi_user::Model, DbErr> {
        if let Some(user) = self.get_by_discord_id(discord_id).await? {
            return Ok(user);
        }

        let now = Utc::now().naive_utc();
        let user = entity::hanabi_user::ActiveModel {
            discord_id: ActiveValue::Set(discord_id),
            name: ActiveValue::Set(name.to_string()),
            gold: ActiveValue::Set(STARTING_GOLD),
            gems: ActiveValue::Set(STARTING_GEMS),
            diamonds: ActiveValue::Set(0),
            resonance_crystals: ActiveValue::Set(0),
            level: ActiveValue::Set(1),
            xp: ActiveValue::Set(0),
            affection: ActiveValue::Set(0),
            summon_count: ActiveValue::Set(0),
            pity_counter: ActiveValue::Set(0),
            last_trained_at: ActiveValue::Set(None),
            last_bonded_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Writes a mutated player row back, refreshing `updated_at`
    pub async fn save(
        &self,
        user: entity::hanabi_user::Model,
    ) -> Result<entity::hanabi_user::Model, DbErr> {
        let mut user_am = user.into_active_model().reset_all();
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user_am.update(self.db).await
    }

    /// Gets every player row
    pub async fn all(&self) -> Result<Vec<entity::hanabi_user::Model>, DbErr> {
        entity::prelude::HanabiUser::find().all(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use hanabi_test_utils::constant::TEST_DISCORD_ID;
    use hanabi_test_utils::prelude::*;

    use super::{UserRepository, STARTING_GEMS, STARTING_GOLD};

    /// Expect a first interaction to create the row with starting balances.
    #[tokio::test]
    async fn get_or_create_creates_with_defaults() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let repository = UserRepository::new(&setup.state.db);

        let user = repository.get_or_create(TEST_DISCORD_ID, "Summoner").await?;

        assert_eq!(user.discord_id, TEST_DISCORD_ID);
        assert_eq!(user.gold, STARTING_GOLD);
        assert_eq!(user.gems, STARTING_GEMS);
        assert_eq!(user.level, 1);
        assert_eq!(user.pity_counter, 0);

        Ok(())
    }

    /// Expect repeated calls to return the same row rather than a duplicate.
    #[tokio::test]
    async fn get_or_create_is_idempotent() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let repository = UserRepository::new(&setup.state.db);

        let first = repository.get_or_create(TEST_DISCORD_ID, "Summoner").await?;
        let second = repository.get_or_create(TEST_DISCORD_ID, "Summoner").await?;

        assert_eq!(first.id, second.id);
        assert_eq!(repository.all().await?.len(), 1);

        Ok(())
    }

    /// Expect save to persist mutated balances.
    #[tokio::test]
    async fn save_persists_mutations() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let repository = UserRepository::new(&setup.state.db);

        let mut user = repository.get_or_create(TEST_DISCORD_ID, "Summoner").await?;
        user.gold = 9999;
        user.pity_counter = 7;
        repository.save(user).await?;

        let reloaded = repository
            .get_by_discord_id(TEST_DISCORD_ID)
            .await?
            .expect("user row should exist");

        assert_eq!(reloaded.gold, 9999);
        assert_eq!(reloaded.pity_counter, 7);

        Ok(())
    }
}
