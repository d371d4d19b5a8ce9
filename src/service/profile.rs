//! Profile summary and paged roster listing.

use sea_orm::DatabaseConnection;

use crate::{
    data::{CharacterRepository, RelicRepository, UserRepository},
    error::{game::GameError, Error},
    model::profile::{ProfileSummary, RosterEntry, RosterPage, RosterSort},
    rules::gacha::Rarity,
};

/// Characters shown per roster page.
pub const PAGE_SIZE: usize = 10;

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the account summary for the profile command.
    pub async fn profile(&self, discord_id: i64) -> Result<ProfileSummary, Error> {
        let user = UserRepository::new(self.db)
            .get_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| GameError::NotFound(format!("Profile for user {discord_id}")))?;

        let roster = CharacterRepository::new(self.db)
            .get_many_by_user_id(user.id)
            .await?;

        let assigned_relics = RelicRepository::new(self.db)
            .get_many_by_user_id(user.id)
            .await?
            .into_iter()
            .filter(|relic| relic.assigned_to.is_some())
            .map(|relic| relic.name)
            .collect();

        Ok(ProfileSummary {
            name: user.name,
            gold: user.gold,
            gems: user.gems,
            diamonds: user.diamonds,
            resonance_crystals: user.resonance_crystals,
            level: user.level,
            xp: user.xp,
            affection: user.affection,
            summon_count: user.summon_count,
            roster_size: roster.len(),
            assigned_relics,
        })
    }

    /// Lists one page of the player's roster, sorted descending by the
    /// requested key. Pages are 1-based; an out-of-range page returns an
    /// empty entry list with accurate page metadata.
    pub async fn roster(
        &self,
        discord_id: i64,
        sort: RosterSort,
        page: usize,
    ) -> Result<RosterPage, Error> {
        let user = UserRepository::new(self.db)
            .get_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| GameError::NotFound(format!("Profile for user {discord_id}")))?;

        let mut roster = CharacterRepository::new(self.db)
            .get_many_by_user_id(user.id)
            .await?;

        match sort {
            RosterSort::Potential => {
                roster.sort_by(|a, b| b.potential.cmp(&a.potential).then(a.name.cmp(&b.name)))
            }
            RosterSort::Level => {
                roster.sort_by(|a, b| b.level.cmp(&a.level).then(a.name.cmp(&b.name)))
            }
        }

        let total_characters = roster.len();
        let total_pages = total_characters.div_ceil(PAGE_SIZE).max(1);
        let page = page.max(1);

        let entries = roster
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(|character| RosterEntry {
                rarity: Rarity::from_potential(character.potential),
                name: character.name,
                element: character.element,
                potential: character.potential,
                level: character.level,
            })
            .collect();

        Ok(RosterPage {
            entries,
            page,
            total_pages,
            total_characters,
        })
    }
}
