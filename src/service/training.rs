//! Training sessions: cooldown-gated random stat gains.

use chrono::{Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::DatabaseConnection;

use crate::{
    data::{CharacterRepository, UserRepository},
    error::{game::GameError, Error},
    model::train::TrainOutcome,
    rules::progression,
    service::{find_character, growth_of, write_growth},
};

/// Hours a player must wait between training sessions.
pub const TRAIN_COOLDOWN_HOURS: i64 = 1;

pub struct TrainingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingService<'a> {
    /// Creates a new instance of [`TrainingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Trains the named character, or a random owned one when no name is
    /// given.
    ///
    /// Gains per session: +1..=5 attack, +5..=20 hit points, +1 crit chance
    /// one time in four, and 10..=24 XP normalized through the level curve.
    /// The one-hour gate is anchored on the persisted `last_trained_at`
    /// column, so it survives process restarts.
    pub async fn train(
        &self,
        discord_id: i64,
        user_name: &str,
        character_name: Option<&str>,
    ) -> Result<TrainOutcome, Error> {
        let user_repository = UserRepository::new(self.db);
        let character_repository = CharacterRepository::new(self.db);

        let mut user = user_repository.get_or_create(discord_id, user_name).await?;

        let now = Utc::now().naive_utc();
        if let Some(last_trained_at) = user.last_trained_at {
            let available_at = last_trained_at + Duration::hours(TRAIN_COOLDOWN_HOURS);
            if now < available_at {
                return Err(GameError::OnCooldown {
                    remaining_minutes: (available_at - now).num_minutes().max(1),
                }
                .into());
            }
        }

        let roster = character_repository.get_many_by_user_id(user.id).await?;
        if roster.is_empty() {
            return Err(GameError::InvalidParticipant(format!(
                "{user_name} has no characters to train"
            ))
            .into());
        }

        let mut rng = StdRng::from_os_rng();
        let mut character = match character_name {
            Some(name) => find_character(&roster, name)
                .ok_or_else(|| GameError::NotFound(format!("Character {name:?}")))?
                .clone(),
            None => roster[rng.random_range(0..roster.len())].clone(),
        };

        let attack_gain = rng.random_range(1..=5);
        let hit_points_gain = rng.random_range(5..=20);
        let crit_gain = if rng.random_bool(0.25) { 1 } else { 0 };
        let xp_gain = rng.random_range(10..=24);

        let mut growth = growth_of(&character);
        growth.attack += attack_gain;
        growth.hit_points += hit_points_gain;
        growth.crit_chance += crit_gain;
        let level_up = progression::apply_xp(&mut growth, xp_gain);
        write_growth(&mut character, &growth);

        let character = character_repository.save(character).await?;

        user.last_trained_at = Some(now);
        user_repository.save(user).await?;

        tracing::debug!(discord_id, character = %character.name, "training session resolved");

        Ok(TrainOutcome {
            character_name: character.name,
            attack_gain,
            hit_points_gain,
            crit_gain,
            xp_gain,
            leveled_up: level_up.leveled_up,
            level: level_up.level,
        })
    }
}
