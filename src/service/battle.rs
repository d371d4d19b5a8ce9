//! Player-versus-player battles: fighter selection, resolution, rewards, and
//! the history log.

use std::str::FromStr;

use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::DatabaseConnection;

use crate::{
    data::{CharacterRepository, HistoryRepository, RelicRepository, UserRepository},
    error::{game::GameError, Error},
    model::battle::{BattleReportEntry, BattleResult, BattleSummary},
    rules::{
        battle::{self, Fighter, RelicBoost, Verdict},
        element::Element,
        progression,
    },
    service::{find_character, growth_of, write_growth},
};

/// Gold credited to the winning side's owner.
pub const WINNER_GOLD_REWARD: i64 = 100;

/// XP granted to each participating character, win or lose.
pub const PARTICIPATION_XP: i32 = 20;

/// Number of rows returned by the battle report.
pub const REPORT_LIMIT: u64 = 5;

pub struct BattleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleService<'a> {
    /// Creates a new instance of [`BattleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fights one battle on behalf of the given player.
    ///
    /// The challenger fields the named character (case-insensitive) or their
    /// highest-potential one. A named opponent fields their highest-potential
    /// character; with no opponent named, a random player owning at least one
    /// character is drawn. Either side lacking an eligible fighter fails with
    /// [`GameError::InvalidParticipant`] before anything is written.
    pub async fn battle(
        &self,
        discord_id: i64,
        user_name: &str,
        character_name: Option<&str>,
        opponent_discord_id: Option<i64>,
    ) -> Result<BattleSummary, Error> {
        if opponent_discord_id == Some(discord_id) {
            return Err(GameError::InvalidParticipant(
                "a player cannot battle their own roster".to_string(),
            )
            .into());
        }

        let user_repository = UserRepository::new(self.db);
        let character_repository = CharacterRepository::new(self.db);
        let relic_repository = RelicRepository::new(self.db);
        let history_repository = HistoryRepository::new(self.db);

        let mut user = user_repository.get_or_create(discord_id, user_name).await?;

        let roster = character_repository.get_many_by_user_id(user.id).await?;
        if roster.is_empty() {
            return Err(GameError::InvalidParticipant(format!(
                "{user_name} has no characters to fight with"
            ))
            .into());
        }

        let mut challenger_character = match character_name {
            Some(name) => find_character(&roster, name)
                .ok_or_else(|| GameError::NotFound(format!("Character {name:?}")))?
                .clone(),
            None => best_of(&roster).clone(),
        };

        let mut rng = StdRng::from_os_rng();

        let (mut opponent, mut opponent_character) = match opponent_discord_id {
            Some(opponent_id) => {
                let opponent = user_repository
                    .get_by_discord_id(opponent_id)
                    .await?
                    .ok_or_else(|| GameError::NotFound(format!("Opponent {opponent_id}")))?;

                let opposing_roster =
                    character_repository.get_many_by_user_id(opponent.id).await?;
                let character = opposing_roster
                    .iter()
                    .max_by_key(|character| character.potential)
                    .ok_or_else(|| {
                        GameError::InvalidParticipant(format!(
                            "{} has no characters to fight with",
                            opponent.name
                        ))
                    })?
                    .clone();

                (opponent, character)
            }
            None => self.random_opponent(&user_repository, &character_repository, user.id, &mut rng)
                .await?,
        };

        let challenger_fighter = fighter_of(
            &challenger_character,
            relic_boost(&relic_repository, user.id, &challenger_character.name).await?,
        )?;
        let opponent_fighter = fighter_of(
            &opponent_character,
            relic_boost(&relic_repository, opponent.id, &opponent_character.name).await?,
        )?;

        let outcome = battle::resolve(&challenger_fighter, &opponent_fighter, &mut rng);

        let result = match outcome.verdict {
            Verdict::ChallengerWins => BattleResult::Win,
            Verdict::OpponentWins => BattleResult::Lose,
            Verdict::Draw => BattleResult::Draw,
        };

        let gold_reward = match outcome.verdict {
            Verdict::ChallengerWins => {
                user.gold += WINNER_GOLD_REWARD;
                WINNER_GOLD_REWARD
            }
            Verdict::OpponentWins => {
                opponent.gold += WINNER_GOLD_REWARD;
                WINNER_GOLD_REWARD
            }
            Verdict::Draw => 0,
        };

        for character in [&mut challenger_character, &mut opponent_character] {
            let mut growth = growth_of(character);
            progression::apply_xp(&mut growth, PARTICIPATION_XP);
            write_growth(character, &growth);
        }

        let challenger_character = character_repository.save(challenger_character).await?;
        let opponent_character = character_repository.save(opponent_character).await?;
        let user = user_repository.save(user).await?;
        let opponent = user_repository.save(opponent).await?;

        history_repository
            .create(
                user.id,
                &challenger_character.name,
                &opponent_character.name,
                result.as_str(),
            )
            .await?;
        history_repository
            .create(
                opponent.id,
                &opponent_character.name,
                &challenger_character.name,
                result.inverted().as_str(),
            )
            .await?;

        tracing::info!(
            discord_id,
            opponent = opponent.discord_id,
            result = result.as_str(),
            rounds = outcome.rounds.len(),
            "battle resolved"
        );

        Ok(BattleSummary {
            challenger_user: user.name,
            opponent_user: opponent.name,
            challenger_character: challenger_character.name,
            opponent_character: opponent_character.name,
            outcome,
            result,
            gold_reward,
            xp_reward: PARTICIPATION_XP,
        })
    }

    /// Gets the player's most recent battles, newest first.
    pub async fn battle_report(&self, discord_id: i64) -> Result<Vec<BattleReportEntry>, Error> {
        let user = UserRepository::new(self.db)
            .get_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| GameError::NotFound(format!("User {discord_id}")))?;

        let rows = HistoryRepository::new(self.db)
            .get_recent(user.id, REPORT_LIMIT)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| BattleReportEntry {
                character_name: row.character_name,
                opponent_name: row.opponent_name,
                result: row.result,
                fought_at: row.fought_at,
            })
            .collect())
    }

    /// Draws a random player other than the challenger who owns at least one
    /// character, fielding their best fighter.
    async fn random_opponent(
        &self,
        user_repository: &UserRepository<'_>,
        character_repository: &CharacterRepository<'_>,
        user_id: i32,
        rng: &mut StdRng,
    ) -> Result<(entity::hanabi_user::Model, entity::hanabi_character::Model), Error> {
        let candidates = character_repository.get_many_excluding_user(user_id).await?;
        if candidates.is_empty() {
            return Err(GameError::InvalidParticipant(
                "no other player owns a character to battle against".to_string(),
            )
            .into());
        }

        let mut owner_ids: Vec<i32> = candidates
            .iter()
            .map(|character| character.user_id)
            .collect();
        owner_ids.sort_unstable();
        owner_ids.dedup();

        let opponent_id = owner_ids[rng.random_range(0..owner_ids.len())];
        let opponent = user_repository
            .get_by_id(opponent_id)
            .await?
            .ok_or_else(|| GameError::NotFound(format!("Opponent row {opponent_id}")))?;

        let character = candidates
            .into_iter()
            .filter(|character| character.user_id == opponent_id)
            .max_by_key(|character| character.potential)
            .ok_or_else(|| {
                GameError::InvalidParticipant(format!(
                    "{} has no characters to fight with",
                    opponent.name
                ))
            })?;

        Ok((opponent, character))
    }
}

fn best_of(roster: &[entity::hanabi_character::Model]) -> &entity::hanabi_character::Model {
    roster
        .iter()
        .max_by_key(|character| character.potential)
        .expect("roster verified non-empty")
}

fn fighter_of(
    character: &entity::hanabi_character::Model,
    relic: Option<RelicBoost>,
) -> Result<Fighter, Error> {
    Ok(Fighter {
        element: Element::from_str(&character.element)?,
        potential: character.potential,
        crit_chance: character.crit_chance + relic.map_or(0, |boost| boost.crit_chance),
        relic,
    })
}

async fn relic_boost(
    relic_repository: &RelicRepository<'_>,
    user_id: i32,
    character_name: &str,
) -> Result<Option<RelicBoost>, Error> {
    Ok(relic_repository
        .find_assigned_to(user_id, character_name)
        .await?
        .map(|relic| RelicBoost {
            attack: relic.attack_boost,
            hit_points: relic.hit_points_boost,
            crit_chance: relic.crit_boost,
        }))
}
