//! Character summoning: batch gacha pulls with pity and duplicate conversion.

use rand::{rngs::StdRng, SeedableRng};
use sea_orm::DatabaseConnection;

use crate::{
    data::{CharacterRepository, TemplateRepository, UserRepository},
    error::{game::GameError, Error},
    model::{
        currency::Currency,
        summon::{SummonOutcome, SummonPull},
    },
    rules::{
        gacha::{self, Rarity},
        progression,
    },
    service::{growth_of, write_growth},
};

/// Largest summon batch accepted in one command.
pub const MAX_BATCH: u32 = 100;

pub struct SummonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SummonService<'a> {
    /// Creates a new instance of [`SummonService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Performs a batch of summon pulls for the given player.
    ///
    /// The full discounted batch cost is checked against the gem balance
    /// before the first pull, so an [`GameError::InsufficientCurrency`] error
    /// never leaves a partial debit. Each pull either creates a new character
    /// instance or, for an already-owned template, converts into a stat boost
    /// plus a half-reward gold refund; only duplicates pay gold.
    pub async fn summon(
        &self,
        discord_id: i64,
        user_name: &str,
        amount: u32,
    ) -> Result<SummonOutcome, Error> {
        let amount = amount.clamp(1, MAX_BATCH);

        let user_repository = UserRepository::new(self.db);
        let template_repository = TemplateRepository::new(self.db);
        let character_repository = CharacterRepository::new(self.db);

        let templates = template_repository.all().await?;
        if templates.is_empty() {
            return Err(GameError::EmptyTemplatePool.into());
        }

        let mut user = user_repository.get_or_create(discord_id, user_name).await?;

        let cost = gacha::summon_cost(amount);
        if user.gems < cost {
            return Err(GameError::InsufficientCurrency {
                currency: Currency::Gems,
                required: cost,
                available: user.gems,
            }
            .into());
        }
        user.gems -= cost;

        let potentials: Vec<i32> = templates.iter().map(|template| template.potential).collect();
        let mut roster = character_repository.get_many_by_user_id(user.id).await?;

        let mut rng = StdRng::from_os_rng();
        let mut pulls = Vec::with_capacity(amount as usize);
        let mut gold_gained: i64 = 0;

        for _ in 0..amount {
            let draw = gacha::draw(&potentials, user.pity_counter, &mut rng);
            user.pity_counter = draw.pity_after;
            user.summon_count += 1;

            let template = &templates[draw.index];
            let reward = gacha::tier_reward(template.potential);

            let owned = roster
                .iter()
                .position(|character| character.name.eq_ignore_ascii_case(&template.name));

            let (duplicate, gold_reward) = match owned {
                Some(position) => {
                    let mut character = roster[position].clone();
                    let mut growth = growth_of(&character);
                    progression::apply_duplicate_boost(&mut growth);
                    write_growth(&mut character, &growth);
                    roster[position] = character_repository.save(character).await?;

                    (true, reward / 2)
                }
                None => {
                    let character = character_repository
                        .create(user.id, &template.name, &template.element, template.potential)
                        .await?;
                    roster.push(character);

                    (false, 0)
                }
            };

            gold_gained += gold_reward;
            pulls.push(SummonPull {
                name: template.name.clone(),
                potential: template.potential,
                rarity: Rarity::from_potential(template.potential),
                duplicate,
                guaranteed: draw.forced,
                gold_reward,
            });
        }

        user.gold += gold_gained;
        let user = user_repository.save(user).await?;

        tracing::info!(
            discord_id,
            amount,
            cost,
            gold_gained,
            pity = user.pity_counter,
            "summon batch resolved"
        );

        Ok(SummonOutcome {
            pulls,
            gems_spent: cost,
            gold_gained,
            pity_counter: user.pity_counter,
        })
    }
}

#[cfg(test)]
mod tests {
    use hanabi_test_utils::constant::TEST_DISCORD_ID;
    use hanabi_test_utils::prelude::*;
    use sea_orm::EntityTrait;

    use crate::{
        data::UserRepository,
        error::{game::GameError, Error},
        rules::gacha::PITY_THRESHOLD,
    };

    use super::SummonService;

    /// Expect an unaffordable batch to leave gems, summon count, and roster
    /// untouched.
    #[tokio::test]
    async fn insufficient_gems_leaves_no_partial_state() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        setup.insert_mock_template("Ember", "Fire", 4500).await?;
        setup
            .insert_mock_user_with_wallet(TEST_DISCORD_ID, 0, 25, 0, 0, 1)
            .await?;

        let service = SummonService::new(&setup.state.db);
        let result = service.summon(TEST_DISCORD_ID, "Summoner", 3).await;

        assert!(matches!(
            result,
            Err(Error::GameError(GameError::InsufficientCurrency { .. }))
        ));

        let user = UserRepository::new(&setup.state.db)
            .get_by_discord_id(TEST_DISCORD_ID)
            .await?
            .expect("user row should exist");
        assert_eq!(user.gems, 25);
        assert_eq!(user.summon_count, 0);

        let roster = entity::prelude::HanabiCharacter::find()
            .all(&setup.state.db)
            .await?;
        assert!(roster.is_empty());

        Ok(())
    }

    /// Expect a single pull to debit ten gems and create the instance without
    /// paying gold.
    #[tokio::test]
    async fn single_pull_creates_instance_without_gold() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        setup.insert_mock_template("Ember", "Fire", 4500).await?;
        setup
            .insert_mock_user_with_wallet(TEST_DISCORD_ID, 0, 50, 0, 0, 1)
            .await?;

        let service = SummonService::new(&setup.state.db);
        let outcome = service.summon(TEST_DISCORD_ID, "Summoner", 1).await.unwrap();

        assert_eq!(outcome.gems_spent, 10);
        assert_eq!(outcome.pulls.len(), 1);
        assert_eq!(outcome.pulls[0].name, "Ember");
        assert!(!outcome.pulls[0].duplicate);
        // Gold is the duplicate refund only; a fresh pull yields the
        // character and nothing else.
        assert_eq!(outcome.pulls[0].gold_reward, 0);
        assert_eq!(outcome.gold_gained, 0);

        let user = UserRepository::new(&setup.state.db)
            .get_by_discord_id(TEST_DISCORD_ID)
            .await?
            .expect("user row should exist");
        assert_eq!(user.gems, 40);
        assert_eq!(user.gold, 0);
        assert_eq!(user.summon_count, 1);
        assert_eq!(user.pity_counter, 1);

        let roster = entity::prelude::HanabiCharacter::find()
            .all(&setup.state.db)
            .await?;
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Ember");

        Ok(())
    }

    /// Expect a duplicate pull to boost the existing instance and refund half
    /// the tier reward instead of creating a second row.
    #[tokio::test]
    async fn duplicate_pull_converts_into_boost() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        setup.insert_mock_template("Ember", "Fire", 4500).await?;
        let user = setup
            .insert_mock_user_with_wallet(TEST_DISCORD_ID, 0, 50, 0, 0, 1)
            .await?;
        let owned = setup
            .insert_mock_character(user.id, "Ember", "Fire", 4500)
            .await?;

        let service = SummonService::new(&setup.state.db);
        let outcome = service.summon(TEST_DISCORD_ID, "Summoner", 1).await.unwrap();

        assert!(outcome.pulls[0].duplicate);
        assert_eq!(outcome.gold_gained, 460);

        let roster = entity::prelude::HanabiCharacter::find()
            .all(&setup.state.db)
            .await?;
        assert_eq!(roster.len(), 1);
        assert!(roster[0].attack > owned.attack);
        assert!(roster[0].hit_points > owned.hit_points);

        Ok(())
    }

    /// Expect the twentieth consecutive pull to be forced top-tier and the
    /// persisted counter to reset.
    #[tokio::test]
    async fn pity_counter_persists_and_forces_the_twentieth_pull() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        // Only low-tier templates are drawable naturally; the SSR enters the
        // pool for the guaranteed pull.
        setup.insert_mock_template("Yuki", "Water", 1000).await?;
        setup.insert_mock_template("Aurelia", "Light", 5200).await?;
        setup
            .insert_mock_user_with_wallet(TEST_DISCORD_ID, 0, 1000, 0, 0, 1)
            .await?;

        let service = SummonService::new(&setup.state.db);
        let user_repository = UserRepository::new(&setup.state.db);

        let mut user = user_repository
            .get_by_discord_id(TEST_DISCORD_ID)
            .await?
            .expect("user row should exist");
        user.pity_counter = PITY_THRESHOLD;
        user_repository.save(user).await?;

        let outcome = service.summon(TEST_DISCORD_ID, "Summoner", 1).await.unwrap();

        assert!(outcome.pulls[0].guaranteed);
        assert_eq!(outcome.pulls[0].name, "Aurelia");
        assert_eq!(outcome.pity_counter, 0);

        Ok(())
    }

    /// Expect a batch of ten to cost ninety gems.
    #[tokio::test]
    async fn batch_of_ten_gets_the_discount() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        setup.insert_mock_template("Yuki", "Water", 1000).await?;
        setup
            .insert_mock_user_with_wallet(TEST_DISCORD_ID, 0, 90, 0, 0, 1)
            .await?;

        let service = SummonService::new(&setup.state.db);
        let outcome = service.summon(TEST_DISCORD_ID, "Summoner", 10).await.unwrap();

        assert_eq!(outcome.gems_spent, 90);
        assert_eq!(outcome.pulls.len(), 10);

        let user = UserRepository::new(&setup.state.db)
            .get_by_discord_id(TEST_DISCORD_ID)
            .await?
            .expect("user row should exist");
        assert_eq!(user.gems, 0);
        assert_eq!(user.summon_count, 10);

        Ok(())
    }

    /// Expect an empty template table to fail before any debit.
    #[tokio::test]
    async fn empty_pool_fails_without_debit() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        setup
            .insert_mock_user_with_wallet(TEST_DISCORD_ID, 0, 50, 0, 0, 1)
            .await?;

        let service = SummonService::new(&setup.state.db);
        let result = service.summon(TEST_DISCORD_ID, "Summoner", 1).await;

        assert!(matches!(
            result,
            Err(Error::GameError(GameError::EmptyTemplatePool))
        ));

        let user = UserRepository::new(&setup.state.db)
            .get_by_discord_id(TEST_DISCORD_ID)
            .await?
            .expect("user row should exist");
        assert_eq!(user.gems, 50);

        Ok(())
    }
}
