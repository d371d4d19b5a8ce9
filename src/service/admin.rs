//! Administrative operations.
//!
//! Every method checks the injected [`Authorizer`] before touching any row,
//! so an unauthorized caller never observes partial effects.

use sea_orm::DatabaseConnection;

use crate::{
    auth::Authorizer,
    catalog::CatalogStore,
    data::{
        user::{STARTING_GEMS, STARTING_GOLD},
        CharacterRepository, RelicRepository, UserRepository,
    },
    error::{game::GameError, Error},
    model::{admin::UserDataExport, currency::Currency},
    rules::progression::{self, Growth},
    service::{growth_of, write_growth},
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    authorizer: &'a Authorizer,
    catalog: &'a CatalogStore,
}

impl<'a> AdminService<'a> {
    /// Creates a new instance of [`AdminService`]
    pub fn new(db: &'a DatabaseConnection, authorizer: &'a Authorizer, catalog: &'a CatalogStore) -> Self {
        Self {
            db,
            authorizer,
            catalog,
        }
    }

    /// Credits a currency balance on the target's row, creating it if needed.
    pub async fn give_currency(
        &self,
        admin_discord_id: i64,
        target_discord_id: i64,
        target_name: &str,
        currency: Currency,
        amount: i64,
    ) -> Result<entity::hanabi_user::Model, Error> {
        self.authorizer.ensure_admin(admin_discord_id)?;

        let user_repository = UserRepository::new(self.db);
        let mut user = user_repository
            .get_or_create(target_discord_id, target_name)
            .await?;

        match currency {
            Currency::Gold => user.gold = (user.gold + amount).max(0),
            Currency::Gems => user.gems = (user.gems + amount).max(0),
            Currency::Diamonds => user.diamonds = (user.diamonds + amount).max(0),
            Currency::ResonanceCrystals => {
                user.resonance_crystals = (user.resonance_crystals + amount).max(0)
            }
        }

        tracing::info!(
            admin = admin_discord_id,
            target = target_discord_id,
            currency = currency.as_str(),
            amount,
            "admin currency grant"
        );

        Ok(user_repository.save(user).await?)
    }

    /// Sets the target's level directly, zeroing leftover XP.
    pub async fn set_level(
        &self,
        admin_discord_id: i64,
        target_discord_id: i64,
        target_name: &str,
        level: i32,
    ) -> Result<entity::hanabi_user::Model, Error> {
        self.authorizer.ensure_admin(admin_discord_id)?;

        let user_repository = UserRepository::new(self.db);
        let mut user = user_repository
            .get_or_create(target_discord_id, target_name)
            .await?;

        user.level = level.max(1);
        user.xp = 0;

        Ok(user_repository.save(user).await?)
    }

    /// Restores the target's row to its first-interaction defaults and
    /// deletes their characters.
    pub async fn reset_user(
        &self,
        admin_discord_id: i64,
        target_discord_id: i64,
    ) -> Result<entity::hanabi_user::Model, Error> {
        self.authorizer.ensure_admin(admin_discord_id)?;

        let user_repository = UserRepository::new(self.db);
        let user = user_repository
            .get_by_discord_id(target_discord_id)
            .await?
            .ok_or_else(|| GameError::NotFound(format!("User {target_discord_id}")))?;

        CharacterRepository::new(self.db)
            .delete_many_by_user_id(user.id)
            .await?;

        let user = user_repository.save(reset_row(user)).await?;

        tracing::warn!(
            admin = admin_discord_id,
            target = target_discord_id,
            "admin profile reset"
        );

        Ok(user)
    }

    /// Applies the profile reset to every player and deletes every character.
    /// Returns the number of rows reset.
    pub async fn reset_all_profiles(&self, admin_discord_id: i64) -> Result<usize, Error> {
        self.authorizer.ensure_admin(admin_discord_id)?;

        let user_repository = UserRepository::new(self.db);

        CharacterRepository::new(self.db).delete_all().await?;

        let users = user_repository.all().await?;
        let count = users.len();
        for user in users {
            user_repository.save(reset_row(user)).await?;
        }

        tracing::warn!(admin = admin_discord_id, count, "global profile reset");

        Ok(count)
    }

    /// Exports the target's row plus owned character and relic names.
    pub async fn view_data(
        &self,
        admin_discord_id: i64,
        target_discord_id: i64,
    ) -> Result<UserDataExport, Error> {
        self.authorizer.ensure_admin(admin_discord_id)?;

        let user = UserRepository::new(self.db)
            .get_by_discord_id(target_discord_id)
            .await?
            .ok_or_else(|| GameError::NotFound(format!("User {target_discord_id}")))?;

        let characters = CharacterRepository::new(self.db)
            .get_many_by_user_id(user.id)
            .await?
            .into_iter()
            .map(|character| character.name)
            .collect();
        let relics = RelicRepository::new(self.db)
            .get_many_by_user_id(user.id)
            .await?
            .into_iter()
            .map(|relic| relic.name)
            .collect();

        Ok(UserDataExport {
            discord_id: user.discord_id,
            name: user.name,
            gold: user.gold,
            gems: user.gems,
            diamonds: user.diamonds,
            resonance_crystals: user.resonance_crystals,
            level: user.level,
            xp: user.xp,
            affection: user.affection,
            summon_count: user.summon_count,
            pity_counter: user.pity_counter,
            characters,
            relics,
        })
    }

    /// Deletes the target's characters matching the given name,
    /// case-insensitive. Returns how many were removed.
    pub async fn ban_character(
        &self,
        admin_discord_id: i64,
        target_discord_id: i64,
        character_name: &str,
    ) -> Result<usize, Error> {
        self.authorizer.ensure_admin(admin_discord_id)?;

        let user = UserRepository::new(self.db)
            .get_by_discord_id(target_discord_id)
            .await?
            .ok_or_else(|| GameError::NotFound(format!("User {target_discord_id}")))?;

        let character_repository = CharacterRepository::new(self.db);
        let matches: Vec<i32> = character_repository
            .get_many_by_user_id(user.id)
            .await?
            .into_iter()
            .filter(|character| character.name.eq_ignore_ascii_case(character_name))
            .map(|character| character.id)
            .collect();

        if matches.is_empty() {
            return Err(GameError::NotFound(format!("Character {character_name:?}")).into());
        }

        let count = matches.len();
        for character_id in matches {
            character_repository.delete(character_id).await?;
        }

        Ok(count)
    }

    /// Adjusts the target's account XP, normalizing overflow into account
    /// levels.
    pub async fn edit_xp(
        &self,
        admin_discord_id: i64,
        target_discord_id: i64,
        target_name: &str,
        amount: i32,
    ) -> Result<entity::hanabi_user::Model, Error> {
        self.authorizer.ensure_admin(admin_discord_id)?;

        let user_repository = UserRepository::new(self.db);
        let mut user = user_repository
            .get_or_create(target_discord_id, target_name)
            .await?;

        // Account rows carry no combat stats; run the level curve over a
        // stat-free growth view.
        let mut growth = Growth {
            level: user.level,
            xp: user.xp,
            attack: 0,
            hit_points: 0,
            crit_chance: 0,
        };
        progression::apply_xp(&mut growth, amount);
        user.level = growth.level;
        user.xp = growth.xp.max(0);

        Ok(user_repository.save(user).await?)
    }

    /// Adjusts the target's affection, floored at zero.
    pub async fn edit_affection(
        &self,
        admin_discord_id: i64,
        target_discord_id: i64,
        target_name: &str,
        amount: i32,
    ) -> Result<entity::hanabi_user::Model, Error> {
        self.authorizer.ensure_admin(admin_discord_id)?;

        let user_repository = UserRepository::new(self.db);
        let mut user = user_repository
            .get_or_create(target_discord_id, target_name)
            .await?;

        user.affection = (user.affection + amount).max(0);

        Ok(user_repository.save(user).await?)
    }

    /// Instantiates a catalog character template for the target. An
    /// already-owned template converts into the duplicate boost instead of a
    /// second instance.
    pub async fn grant_character(
        &self,
        admin_discord_id: i64,
        target_discord_id: i64,
        target_name: &str,
        template_name: &str,
    ) -> Result<entity::hanabi_character::Model, Error> {
        self.authorizer.ensure_admin(admin_discord_id)?;

        let record = self.catalog.character(template_name)?;

        let user = UserRepository::new(self.db)
            .get_or_create(target_discord_id, target_name)
            .await?;
        let character_repository = CharacterRepository::new(self.db);

        let roster = character_repository.get_many_by_user_id(user.id).await?;
        let owned = roster
            .iter()
            .find(|character| character.name.eq_ignore_ascii_case(&record.name));

        match owned {
            Some(existing) => {
                let mut character = existing.clone();
                let mut growth = growth_of(&character);
                progression::apply_duplicate_boost(&mut growth);
                write_growth(&mut character, &growth);

                Ok(character_repository.save(character).await?)
            }
            None => Ok(character_repository
                .create(
                    user.id,
                    &record.name,
                    record.element.as_str(),
                    record.potential,
                )
                .await?),
        }
    }

    /// Instantiates a catalog relic record for the target.
    pub async fn grant_relic(
        &self,
        admin_discord_id: i64,
        target_discord_id: i64,
        target_name: &str,
        relic_name: &str,
    ) -> Result<entity::hanabi_relic::Model, Error> {
        self.authorizer.ensure_admin(admin_discord_id)?;

        let record = self.catalog.relic(relic_name)?;

        let user = UserRepository::new(self.db)
            .get_or_create(target_discord_id, target_name)
            .await?;

        Ok(RelicRepository::new(self.db)
            .create(
                user.id,
                &record.name,
                &record.quality,
                record.attack_boost,
                record.hit_points_boost,
                record.crit_boost,
                record.image.as_deref(),
            )
            .await?)
    }
}

fn reset_row(mut user: entity::hanabi_user::Model) -> entity::hanabi_user::Model {
    user.gold = STARTING_GOLD;
    user.gems = STARTING_GEMS;
    user.diamonds = 0;
    user.resonance_crystals = 0;
    user.level = 1;
    user.xp = 0;
    user.affection = 0;
    user.summon_count = 0;
    user.pity_counter = 0;
    user.last_trained_at = None;
    user.last_bonded_at = None;

    user
}

#[cfg(test)]
mod tests {
    use hanabi_test_utils::constant::{TEST_ADMIN_DISCORD_ID, TEST_DISCORD_ID};
    use hanabi_test_utils::prelude::*;
    use sea_orm::EntityTrait;

    use crate::{
        auth::Authorizer,
        catalog::CatalogStore,
        error::{auth::AuthError, Error},
        model::currency::Currency,
    };

    use super::AdminService;

    fn authorizer() -> Authorizer {
        Authorizer::new([TEST_ADMIN_DISCORD_ID])
    }

    /// Expect every operation with a non-admin caller to fail before touching
    /// the store.
    #[tokio::test]
    async fn non_admin_caller_is_unauthorized() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let fixture = CatalogFixture::new()?;
        let authorizer = authorizer();
        let catalog = CatalogStore::new(fixture.root());
        let service = AdminService::new(&setup.state.db, &authorizer, &catalog);

        let result = service
            .give_currency(TEST_DISCORD_ID, TEST_DISCORD_ID, "Summoner", Currency::Gold, 100)
            .await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::Unauthorized(_)))
        ));

        let users = entity::prelude::HanabiUser::find().all(&setup.state.db).await?;
        assert!(users.is_empty());

        Ok(())
    }

    /// Expect a currency grant to create the target row and credit the
    /// balance.
    #[tokio::test]
    async fn give_currency_credits_target() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let fixture = CatalogFixture::new()?;
        let authorizer = authorizer();
        let catalog = CatalogStore::new(fixture.root());
        let service = AdminService::new(&setup.state.db, &authorizer, &catalog);

        let user = service
            .give_currency(
                TEST_ADMIN_DISCORD_ID,
                TEST_DISCORD_ID,
                "Summoner",
                Currency::Diamonds,
                250,
            )
            .await
            .unwrap();

        assert_eq!(user.diamonds, 250);

        Ok(())
    }

    /// Expect a reset to restore defaults and delete the target's roster
    /// only.
    #[tokio::test]
    async fn reset_user_restores_defaults_and_clears_roster() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let fixture = CatalogFixture::new()?;
        let user = setup
            .insert_mock_user_with_wallet(TEST_DISCORD_ID, 9999, 500, 10, 10, 50)
            .await?;
        setup
            .insert_mock_character(user.id, "Ember", "Fire", 4500)
            .await?;

        let authorizer = authorizer();
        let catalog = CatalogStore::new(fixture.root());
        let service = AdminService::new(&setup.state.db, &authorizer, &catalog);

        let reset = service
            .reset_user(TEST_ADMIN_DISCORD_ID, TEST_DISCORD_ID)
            .await
            .unwrap();

        assert_eq!(reset.gold, 500);
        assert_eq!(reset.gems, 50);
        assert_eq!(reset.level, 1);
        assert_eq!(reset.summon_count, 0);

        let roster = entity::prelude::HanabiCharacter::find()
            .all(&setup.state.db)
            .await?;
        assert!(roster.is_empty());

        Ok(())
    }

    /// Expect the ban to match case-insensitively and delete every copy.
    #[tokio::test]
    async fn ban_character_matches_case_insensitively() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let fixture = CatalogFixture::new()?;
        let user = setup.insert_mock_user(TEST_DISCORD_ID).await?;
        setup
            .insert_mock_character(user.id, "Ember", "Fire", 4500)
            .await?;
        setup
            .insert_mock_character(user.id, "Yuki", "Water", 3000)
            .await?;

        let authorizer = authorizer();
        let catalog = CatalogStore::new(fixture.root());
        let service = AdminService::new(&setup.state.db, &authorizer, &catalog);

        let count = service
            .ban_character(TEST_ADMIN_DISCORD_ID, TEST_DISCORD_ID, "ember")
            .await
            .unwrap();

        assert_eq!(count, 1);

        let roster = entity::prelude::HanabiCharacter::find()
            .all(&setup.state.db)
            .await?;
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Yuki");

        Ok(())
    }

    /// Expect the export to list the row plus owned character and relic
    /// names.
    #[tokio::test]
    async fn view_data_exports_row_and_possessions() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let fixture = CatalogFixture::new()?;
        let user = setup.insert_mock_user(TEST_DISCORD_ID).await?;
        setup
            .insert_mock_character(user.id, "Ember", "Fire", 4500)
            .await?;
        setup
            .insert_mock_relic(user.id, "Moon Blade", "SSR", 150, 400, 5)
            .await?;

        let authorizer = authorizer();
        let catalog = CatalogStore::new(fixture.root());
        let service = AdminService::new(&setup.state.db, &authorizer, &catalog);

        let export = service
            .view_data(TEST_ADMIN_DISCORD_ID, TEST_DISCORD_ID)
            .await
            .unwrap();

        assert_eq!(export.discord_id, TEST_DISCORD_ID);
        assert_eq!(export.characters, vec!["Ember".to_string()]);
        assert_eq!(export.relics, vec!["Moon Blade".to_string()]);
        // The export is handed to the shell as JSON.
        assert!(serde_json::to_string(&export).is_ok());

        Ok(())
    }

    /// Expect granting an owned template to convert into the duplicate boost
    /// instead of a second instance.
    #[tokio::test]
    async fn grant_character_converts_duplicates() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let fixture = CatalogFixture::new()?;
        fixture.write_character("Ember", "Fire", 4500)?;
        let user = setup.insert_mock_user(TEST_DISCORD_ID).await?;
        let owned = setup
            .insert_mock_character(user.id, "Ember", "Fire", 4500)
            .await?;

        let authorizer = authorizer();
        let catalog = CatalogStore::new(fixture.root());
        let service = AdminService::new(&setup.state.db, &authorizer, &catalog);

        let boosted = service
            .grant_character(TEST_ADMIN_DISCORD_ID, TEST_DISCORD_ID, "Summoner", "Ember")
            .await
            .unwrap();

        assert_eq!(boosted.id, owned.id);
        assert!(boosted.attack > owned.attack);

        let roster = entity::prelude::HanabiCharacter::find()
            .all(&setup.state.db)
            .await?;
        assert_eq!(roster.len(), 1);

        Ok(())
    }

    /// Expect account XP edits to normalize into account levels.
    #[tokio::test]
    async fn edit_xp_normalizes_into_levels() -> Result<(), TestError> {
        let setup = test_setup_with_game_tables!()?;
        let fixture = CatalogFixture::new()?;
        let authorizer = authorizer();
        let catalog = CatalogStore::new(fixture.root());
        let service = AdminService::new(&setup.state.db, &authorizer, &catalog);

        let user = service
            .edit_xp(TEST_ADMIN_DISCORD_ID, TEST_DISCORD_ID, "Summoner", 350)
            .await
            .unwrap();

        assert_eq!(user.level, 3);
        assert_eq!(user.xp, 50);

        Ok(())
    }
}
