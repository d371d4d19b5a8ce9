//! Bonding sessions: affection gain on a multi-hour cooldown.

use chrono::{Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::DatabaseConnection;

use crate::{
    data::{CharacterRepository, UserRepository},
    error::{game::GameError, Error},
    model::affection::BondOutcome,
};

/// Hours a player must wait between bonding sessions.
pub const BOND_COOLDOWN_HOURS: i64 = 3;

/// Affection gained per session.
pub const AFFECTION_GAIN: i32 = 5;

pub struct AffectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AffectionService<'a> {
    /// Creates a new instance of [`AffectionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Spends a bonding session with a random companion, raising the player's
    /// affection. Gated on the persisted `last_bonded_at` column.
    pub async fn bond(&self, discord_id: i64, user_name: &str) -> Result<BondOutcome, Error> {
        let user_repository = UserRepository::new(self.db);
        let character_repository = CharacterRepository::new(self.db);

        let mut user = user_repository.get_or_create(discord_id, user_name).await?;

        let now = Utc::now().naive_utc();
        if let Some(last_bonded_at) = user.last_bonded_at {
            let available_at = last_bonded_at + Duration::hours(BOND_COOLDOWN_HOURS);
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
                "{user_name} has no companion to bond with"
            ))
            .into());
        }

        let mut rng = StdRng::from_os_rng();
        let companion = &roster[rng.random_range(0..roster.len())];

        user.affection += AFFECTION_GAIN;
        user.last_bonded_at = Some(now);
        let user = user_repository.save(user).await?;

        Ok(BondOutcome {
            companion_name: companion.name.clone(),
            affection: user.affection,
        })
    }
}
