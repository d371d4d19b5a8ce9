//! Insert helpers for seeding game rows through [`TestSetup`].
//!
//! Each helper writes one row with standard test values and returns the stored
//! model, mirroring what the repositories would produce in production.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    /// Insert a player row with starting balances (500 gold, 50 gems).
    pub async fn insert_mock_user(
        &self,
        discord_id: i64,
    ) -> Result<entity::hanabi_user::Model, TestError> {
        self.insert_mock_user_with_wallet(discord_id, 500, 50, 0, 0, 1)
            .await
    }

    /// Insert a player row with explicit balances and level.
    pub async fn insert_mock_user_with_wallet(
        &self,
        discord_id: i64,
        gold: i64,
        gems: i64,
        diamonds: i64,
        resonance_crystals: i64,
        level: i32,
    ) -> Result<entity::hanabi_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::HanabiUser::insert(entity::hanabi_user::ActiveModel {
                discord_id: ActiveValue::Set(discord_id),
                name: ActiveValue::Set(format!("Summoner{discord_id}")),
                gold: ActiveValue::Set(gold),
                gems: ActiveValue::Set(gems),
                diamonds: ActiveValue::Set(diamonds),
                resonance_crystals: ActiveValue::Set(resonance_crystals),
                level: ActiveValue::Set(level),
                xp: ActiveValue::Set(0),
                affection: ActiveValue::Set(0),
                summon_count: ActiveValue::Set(0),
                pity_counter: ActiveValue::Set(0),
                last_trained_at: ActiveValue::Set(None),
                last_bonded_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Insert a character instance with fresh-summon stats (level 1, 50 atk, 500 hp, 5 crit).
    pub async fn insert_mock_character(
        &self,
        user_id: i32,
        name: &str,
        element: &str,
        potential: i32,
    ) -> Result<entity::hanabi_character::Model, TestError> {
        self.insert_mock_character_with_stats(user_id, name, element, potential, 1, 0, 50, 500, 5)
            .await
    }

    /// Insert a character instance with explicit progression stats.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_mock_character_with_stats(
        &self,
        user_id: i32,
        name: &str,
        element: &str,
        potential: i32,
        level: i32,
        xp: i32,
        attack: i32,
        hit_points: i32,
        crit_chance: i32,
    ) -> Result<entity::hanabi_character::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::HanabiCharacter::insert(entity::hanabi_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                element: ActiveValue::Set(element.to_string()),
                potential: ActiveValue::Set(potential),
                level: ActiveValue::Set(level),
                xp: ActiveValue::Set(xp),
                attack: ActiveValue::Set(attack),
                hit_points: ActiveValue::Set(hit_points),
                crit_chance: ActiveValue::Set(crit_chance),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Insert a summonable template row.
    pub async fn insert_mock_template(
        &self,
        name: &str,
        element: &str,
        potential: i32,
    ) -> Result<entity::hanabi_character_template::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::HanabiCharacterTemplate::insert(
            entity::hanabi_character_template::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                element: ActiveValue::Set(element.to_string()),
                potential: ActiveValue::Set(potential),
                image_path: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.state.db)
        .await?)
    }

    /// Insert an unassigned relic at level 1 with no awakenings.
    pub async fn insert_mock_relic(
        &self,
        user_id: i32,
        name: &str,
        quality: &str,
        attack_boost: i32,
        hit_points_boost: i32,
        crit_boost: i32,
    ) -> Result<entity::hanabi_relic::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::HanabiRelic::insert(entity::hanabi_relic::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                quality: ActiveValue::Set(quality.to_string()),
                level: ActiveValue::Set(1),
                awaken: ActiveValue::Set(0),
                attack_boost: ActiveValue::Set(attack_boost),
                hit_points_boost: ActiveValue::Set(hit_points_boost),
                crit_boost: ActiveValue::Set(crit_boost),
                assigned_to: ActiveValue::Set(None),
                image_path: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Insert a battle history row with an explicit timestamp.
    pub async fn insert_mock_history(
        &self,
        user_id: i32,
        character_name: &str,
        opponent_name: &str,
        result: &str,
        fought_at: NaiveDateTime,
    ) -> Result<entity::hanabi_battle_history::Model, TestError> {
        Ok(entity::prelude::HanabiBattleHistory::insert(
            entity::hanabi_battle_history::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_name: ActiveValue::Set(character_name.to_string()),
                opponent_name: ActiveValue::Set(opponent_name.to_string()),
                result: ActiveValue::Set(result.to_string()),
                fought_at: ActiveValue::Set(fought_at),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.state.db)
        .await?)
    }
}
