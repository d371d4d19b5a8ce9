//! Upgrading: feeding XP into a character for gold.

use sea_orm::DatabaseConnection;

use crate::{
    data::{CharacterRepository, UserRepository},
    error::{game::GameError, Error},
    model::{currency::Currency, upgrade::UpgradeOutcome},
    rules::progression,
    service::{find_character, growth_of, write_growth},
};

/// XP granted per paid repetition.
pub const XP_PER_REPETITION: i32 = 100;

/// Most repetitions accepted in one command.
pub const MAX_REPETITIONS: u32 = 100;

pub struct UpgradeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UpgradeService<'a> {
    /// Creates a new instance of [`UpgradeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Feeds up to `times` repetitions of 100 XP into the named character.
    ///
    /// Each repetition costs `level * 100` gold, evaluated as the level rises,
    /// and repetitions stop early when gold runs short; the totals in the
    /// outcome reflect what was actually paid. Not affording even the first
    /// repetition fails with [`GameError::InsufficientCurrency`].
    pub async fn upgrade(
        &self,
        discord_id: i64,
        user_name: &str,
        character_name: &str,
        times: u32,
    ) -> Result<UpgradeOutcome, Error> {
        let times = times.clamp(1, MAX_REPETITIONS);

        let user_repository = UserRepository::new(self.db);
        let character_repository = CharacterRepository::new(self.db);

        let mut user = user_repository.get_or_create(discord_id, user_name).await?;

        let roster = character_repository.get_many_by_user_id(user.id).await?;
        let mut character = find_character(&roster, character_name)
            .ok_or_else(|| GameError::NotFound(format!("Character {character_name:?}")))?
            .clone();

        let mut growth = growth_of(&character);
        let first_cost = i64::from(growth.level) * 100;
        if user.gold < first_cost {
            return Err(GameError::InsufficientCurrency {
                currency: Currency::Gold,
                required: first_cost,
                available: user.gold,
            }
            .into());
        }

        let mut repetitions = 0;
        let mut gold_spent: i64 = 0;
        let mut xp_gained = 0;
        let mut leveled_up = false;

        for _ in 0..times {
            let cost = i64::from(growth.level) * 100;
            if user.gold < cost {
                break;
            }

            user.gold -= cost;
            gold_spent += cost;
            xp_gained += XP_PER_REPETITION;
            repetitions += 1;

            if progression::apply_xp(&mut growth, XP_PER_REPETITION).leveled_up {
                leveled_up = true;
            }
        }

        write_growth(&mut character, &growth);
        let character = character_repository.save(character).await?;
        user_repository.save(user).await?;

        Ok(UpgradeOutcome {
            character_name: character.name,
            repetitions,
            gold_spent,
            xp_gained,
            leveled_up,
            level: growth.level,
        })
    }
}
