//! Relic operations: summoning, assignment, upgrading, awakening, and
//! inheritance.

use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::DatabaseConnection;

use crate::{
    catalog::CatalogStore,
    data::{CharacterRepository, RelicRepository, UserRepository},
    error::{game::GameError, Error},
    model::{
        currency::Currency,
        relic::{InheritKind, RelicPull, RelicSummonOutcome},
    },
    service::{find_character, find_relic},
};

/// Diamond cost of one relic pull.
pub const RELIC_SUMMON_COST: i64 = 50;

/// Player level at which relic summoning unlocks.
pub const RELIC_SUMMON_LEVEL: i32 = 60;

/// Largest relic summon batch accepted in one command.
pub const MAX_BATCH: u32 = 100;

/// Diamond cost of an inheritance transfer.
pub const INHERIT_COST: i64 = 100;

/// Player level required to inherit an awaken counter.
pub const INHERIT_AWAKEN_LEVEL: i32 = 110;

/// Relic level below which awakening is refused.
pub const AWAKEN_LEVEL_FLOOR: i32 = 30;

/// Resonance-crystal cost of awakening a relic at the given level. Higher
/// relic levels pay less.
pub fn awaken_cost(relic_level: i32) -> Option<i64> {
    if relic_level >= 90 {
        Some(100)
    } else if relic_level >= 60 {
        Some(150)
    } else if relic_level >= AWAKEN_LEVEL_FLOOR {
        Some(200)
    } else {
        None
    }
}

pub struct RelicService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a CatalogStore,
}

impl<'a> RelicService<'a> {
    /// Creates a new instance of [`RelicService`]
    pub fn new(db: &'a DatabaseConnection, catalog: &'a CatalogStore) -> Self {
        Self { db, catalog }
    }

    /// Summons a batch of relics drawn uniformly from the relic catalog.
    ///
    /// Requires player level [`RELIC_SUMMON_LEVEL`]; the whole batch cost is
    /// checked against the diamond balance before the first pull.
    pub async fn relic_summon(
        &self,
        discord_id: i64,
        user_name: &str,
        amount: u32,
    ) -> Result<RelicSummonOutcome, Error> {
        let amount = amount.clamp(1, MAX_BATCH);

        let user_repository = UserRepository::new(self.db);
        let relic_repository = RelicRepository::new(self.db);

        let mut user = user_repository.get_or_create(discord_id, user_name).await?;
        if user.level < RELIC_SUMMON_LEVEL {
            return Err(GameError::LevelLocked {
                required: RELIC_SUMMON_LEVEL,
                current: user.level,
            }
            .into());
        }

        let records = self.catalog.relics()?;
        if records.is_empty() {
            return Err(GameError::EmptyRelicPool.into());
        }

        let cost = i64::from(amount) * RELIC_SUMMON_COST;
        if user.diamonds < cost {
            return Err(GameError::InsufficientCurrency {
                currency: Currency::Diamonds,
                required: cost,
                available: user.diamonds,
            }
            .into());
        }
        user.diamonds -= cost;

        let mut rng = StdRng::from_os_rng();
        let mut pulls = Vec::with_capacity(amount as usize);

        for _ in 0..amount {
            let record = &records[rng.random_range(0..records.len())];
            let relic = relic_repository
                .create(
                    user.id,
                    &record.name,
                    &record.quality,
                    record.attack_boost,
                    record.hit_points_boost,
                    record.crit_boost,
                    record.image.as_deref(),
                )
                .await?;

            pulls.push(RelicPull {
                name: relic.name,
                quality: relic.quality,
                attack_boost: relic.attack_boost,
                hit_points_boost: relic.hit_points_boost,
                crit_boost: relic.crit_boost,
            });
        }

        user_repository.save(user).await?;

        tracing::info!(discord_id, amount, cost, "relic summon batch resolved");

        Ok(RelicSummonOutcome {
            pulls,
            diamonds_spent: cost,
        })
    }

    /// Assigns an owned relic to an owned character by name, both matched
    /// case-insensitively. The battle resolver picks the boost up from this
    /// assignment.
    pub async fn assign_relic(
        &self,
        discord_id: i64,
        relic_name: &str,
        character_name: &str,
    ) -> Result<entity::hanabi_relic::Model, Error> {
        let user = self.require_user(discord_id).await?;
        let relic_repository = RelicRepository::new(self.db);
        let character_repository = CharacterRepository::new(self.db);

        let inventory = relic_repository.get_many_by_user_id(user.id).await?;
        let mut relic = find_relic(&inventory, relic_name)
            .ok_or_else(|| GameError::NotFound(format!("Relic {relic_name:?}")))?
            .clone();

        let roster = character_repository.get_many_by_user_id(user.id).await?;
        let character = find_character(&roster, character_name)
            .ok_or_else(|| GameError::NotFound(format!("Character {character_name:?}")))?;

        relic.assigned_to = Some(character.name.clone());

        Ok(relic_repository.save(relic).await?)
    }

    /// Consumes a duplicate copy to raise the relic's level by one and mark
    /// its quality with a `+` suffix.
    pub async fn upgrade_relic(
        &self,
        discord_id: i64,
        relic_name: &str,
    ) -> Result<entity::hanabi_relic::Model, Error> {
        let user = self.require_user(discord_id).await?;
        let relic_repository = RelicRepository::new(self.db);

        let inventory = relic_repository.get_many_by_user_id(user.id).await?;
        let mut copies: Vec<&entity::hanabi_relic::Model> = inventory
            .iter()
            .filter(|relic| relic.name.eq_ignore_ascii_case(relic_name))
            .collect();
        if copies.len() < 2 {
            return Err(GameError::MissingDuplicate(relic_name.to_string()).into());
        }

        // Keep the most developed copy, consume the least.
        copies.sort_by_key(|relic| (relic.level, relic.awaken, relic.id));
        let consumed = copies.first().expect("at least two copies").id;
        let mut base = (*copies.last().expect("at least two copies")).clone();

        relic_repository.delete(consumed).await?;

        base.level += 1;
        if !base.quality.ends_with('+') {
            base.quality.push('+');
        }

        Ok(relic_repository.save(base).await?)
    }

    /// Awakens a relic for resonance crystals; the cost tier falls as the
    /// relic's level rises, and relics below level [`AWAKEN_LEVEL_FLOOR`] are
    /// refused.
    pub async fn awaken_relic(
        &self,
        discord_id: i64,
        relic_name: &str,
    ) -> Result<entity::hanabi_relic::Model, Error> {
        let mut user = self.require_user(discord_id).await?;
        let relic_repository = RelicRepository::new(self.db);

        let inventory = relic_repository.get_many_by_user_id(user.id).await?;
        let mut relic = find_relic(&inventory, relic_name)
            .ok_or_else(|| GameError::NotFound(format!("Relic {relic_name:?}")))?
            .clone();

        let cost = awaken_cost(relic.level).ok_or(GameError::LevelLocked {
            required: AWAKEN_LEVEL_FLOOR,
            current: relic.level,
        })?;

        if user.resonance_crystals < cost {
            return Err(GameError::InsufficientCurrency {
                currency: Currency::ResonanceCrystals,
                required: cost,
                available: user.resonance_crystals,
            }
            .into());
        }
        user.resonance_crystals -= cost;

        relic.awaken += 1;

        let relic = relic_repository.save(relic).await?;
        UserRepository::new(self.db).save(user).await?;

        Ok(relic)
    }

    /// Copies a trait from one owned relic onto another for diamonds.
    ///
    /// Inheriting the awaken counter additionally requires player level
    /// [`INHERIT_AWAKEN_LEVEL`].
    pub async fn inherit_relic(
        &self,
        discord_id: i64,
        from_name: &str,
        to_name: &str,
        kind: InheritKind,
    ) -> Result<entity::hanabi_relic::Model, Error> {
        let mut user = self.require_user(discord_id).await?;

        if kind == InheritKind::Awaken && user.level < INHERIT_AWAKEN_LEVEL {
            return Err(GameError::LevelLocked {
                required: INHERIT_AWAKEN_LEVEL,
                current: user.level,
            }
            .into());
        }

        if user.diamonds < INHERIT_COST {
            return Err(GameError::InsufficientCurrency {
                currency: Currency::Diamonds,
                required: INHERIT_COST,
                available: user.diamonds,
            }
            .into());
        }

        let relic_repository = RelicRepository::new(self.db);
        let inventory = relic_repository.get_many_by_user_id(user.id).await?;

        let from = find_relic(&inventory, from_name)
            .ok_or_else(|| GameError::NotFound(format!("Relic {from_name:?}")))?;
        let mut to = inventory
            .iter()
            .find(|relic| relic.name.eq_ignore_ascii_case(to_name) && relic.id != from.id)
            .ok_or_else(|| GameError::NotFound(format!("Relic {to_name:?}")))?
            .clone();

        match kind {
            InheritKind::Quality => to.quality = from.quality.clone(),
            InheritKind::Awaken => to.awaken = from.awaken,
        }

        user.diamonds -= INHERIT_COST;

        let to = relic_repository.save(to).await?;
        UserRepository::new(self.db).save(user).await?;

        Ok(to)
    }

    async fn require_user(&self, discord_id: i64) -> Result<entity::hanabi_user::Model, Error> {
        UserRepository::new(self.db)
            .get_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| GameError::NotFound(format!("User {discord_id}")).into())
    }
}
