use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

/// Attack stat of a freshly summoned character.
pub const BASE_ATTACK: i32 = 50;

/// Hit point stat of a freshly summoned character.
pub const BASE_HIT_POINTS: i32 = 500;

/// Crit chance of a freshly summoned character.
pub const BASE_CRIT_CHANCE: i32 = 5;

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a level 1 character instance with base stats for the given owner
    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        element: &str,
        potential: i32,
    ) -> Result<entity::hanabi_character::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let character = entity::hanabi_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            element: ActiveValue::Set(element.to_string()),
            potential: ActiveValue::Set(potential),
            level: ActiveValue::Set(1),
            xp: ActiveValue::Set(0),
            attack: ActiveValue::Set(BASE_ATTACK),
            hit_points: ActiveValue::Set(BASE_HIT_POINTS),
            crit_chance: ActiveValue::Set(BASE_CRIT_CHANCE),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets every character owned by the given user
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::hanabi_character::Model>, DbErr> {
        entity::prelude::HanabiCharacter::find()
            .filter(entity::hanabi_character::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Gets every character owned by anyone other than the given user, for
    /// random opponent selection
    pub async fn get_many_excluding_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::hanabi_character::Model>, DbErr> {
        entity::prelude::HanabiCharacter::find()
            .filter(entity::hanabi_character::Column::UserId.ne(user_id))
            .all(self.db)
            .await
    }

    /// Writes a mutated character row back, refreshing `updated_at`
    pub async fn save(
        &self,
        character: entity::hanabi_character::Model,
    ) -> Result<entity::hanabi_character::Model, DbErr> {
        let mut character_am = character.into_active_model().reset_all();
        character_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        character_am.update(self.db).await
    }

    /// Deletes a character instance by row id
    ///
    /// Returns OK regardless of the row existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::HanabiCharacter::delete_by_id(character_id)
            .exec(self.db)
            .await
    }

    /// Deletes every character owned by the given user
    pub async fn delete_many_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::HanabiCharacter::delete_many()
            .filter(entity::hanabi_character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Deletes every character row, used by the global profile reset
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::HanabiCharacter::delete_many()
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use hanabi_test_utils::constant::{TEST_DISCORD_ID, TEST_OPPONENT_DISCORD_ID};
    use hanabi_test_utils::prelude::*;

    use super::{CharacterRepository, BASE_ATTACK, BASE_CRIT_CHANCE, BASE_HIT_POINTS};

    /// Expect a created instance to start at level 1 with base stats.
    #[tokio::test]
    async fn create_starts_at_base_stats() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let user = setup.insert_mock_user(TEST_DISCORD_ID).await?;
        let repository = CharacterRepository::new(&setup.state.db);

        let character = repository.create(user.id, "Ember", "Fire", 4500).await?;

        assert_eq!(character.user_id, user.id);
        assert_eq!(character.level, 1);
        assert_eq!(character.attack, BASE_ATTACK);
        assert_eq!(character.hit_points, BASE_HIT_POINTS);
        assert_eq!(character.crit_chance, BASE_CRIT_CHANCE);

        Ok(())
    }

    /// Expect ownership filters to split rosters by user.
    #[tokio::test]
    async fn ownership_filters_split_rosters() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let user = setup.insert_mock_user(TEST_DISCORD_ID).await?;
        let rival = setup.insert_mock_user(TEST_OPPONENT_DISCORD_ID).await?;
        setup.insert_mock_character(user.id, "Ember", "Fire", 4500).await?;
        setup.insert_mock_character(rival.id, "Yuki", "Water", 3000).await?;

        let repository = CharacterRepository::new(&setup.state.db);

        let owned = repository.get_many_by_user_id(user.id).await?;
        let others = repository.get_many_excluding_user(user.id).await?;

        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].name, "Ember");
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].name, "Yuki");

        Ok(())
    }

    /// Expect delete_many_by_user_id to leave other rosters untouched.
    #[tokio::test]
    async fn delete_many_scopes_to_owner() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let user = setup.insert_mock_user(TEST_DISCORD_ID).await?;
        let rival = setup.insert_mock_user(TEST_OPPONENT_DISCORD_ID).await?;
        setup.insert_mock_character(user.id, "Ember", "Fire", 4500).await?;
        setup.insert_mock_character(user.id, "Aurelia", "Light", 5200).await?;
        setup.insert_mock_character(rival.id, "Yuki", "Water", 3000).await?;

        let repository = CharacterRepository::new(&setup.state.db);

        let result = repository.delete_many_by_user_id(user.id).await?;

        assert_eq!(result.rows_affected, 2);
        assert_eq!(repository.get_many_by_user_id(rival.id).await?.len(), 1);

        Ok(())
    }
}
