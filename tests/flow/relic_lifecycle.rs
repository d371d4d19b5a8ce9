use hanabi::{
    auth::Authorizer,
    catalog::CatalogStore,
    service::{admin::AdminService, battle::BattleService, relic::RelicService},
};
use hanabi_test_utils::constant::{
    TEST_ADMIN_DISCORD_ID, TEST_DISCORD_ID, TEST_OPPONENT_DISCORD_ID,
};
use hanabi_test_utils::prelude::*;

/// Expect an admin-granted relic to be assignable and its attack boost to
/// decide an otherwise-even battle.
#[tokio::test]
async fn granted_relic_boost_reaches_the_battlefield() -> Result<(), TestError> {
    let setup = test_setup_with_game_tables!()?;
    let fixture = CatalogFixture::new()?;
    fixture.write_relic("Moon Blade", "SSR", 1_000_000, 0, 0)?;

    let user = setup.insert_mock_user(TEST_DISCORD_ID).await?;
    let rival = setup.insert_mock_user(TEST_OPPONENT_DISCORD_ID).await?;
    setup
        .insert_mock_character_with_stats(user.id, "Ember", "Fire", 0, 1, 0, 50, 500, 0)
        .await?;
    setup
        .insert_mock_character_with_stats(rival.id, "Yuki", "Fire", 0, 1, 0, 50, 500, 0)
        .await?;

    let authorizer = Authorizer::new([TEST_ADMIN_DISCORD_ID]);
    let catalog = CatalogStore::new(fixture.root());

    AdminService::new(&setup.state.db, &authorizer, &catalog)
        .grant_relic(TEST_ADMIN_DISCORD_ID, TEST_DISCORD_ID, "Summoner", "Moon Blade")
        .await
        .unwrap();

    let relics = RelicService::new(&setup.state.db, &catalog);
    let relic = relics
        .assign_relic(TEST_DISCORD_ID, "Moon Blade", "Ember")
        .await
        .unwrap();
    assert_eq!(relic.assigned_to.as_deref(), Some("Ember"));

    // The overwhelming attack boost ends the battle in round one.
    let summary = BattleService::new(&setup.state.db)
        .battle(
            TEST_DISCORD_ID,
            "Summoner",
            None,
            Some(TEST_OPPONENT_DISCORD_ID),
        )
        .await
        .unwrap();

    assert_eq!(summary.result.as_str(), "win");
    assert_eq!(summary.outcome.rounds.len(), 1);

    Ok(())
}

/// Expect a duplicate upgrade followed by awakening to consume and spend the
/// right resources.
#[tokio::test]
async fn upgrade_then_awaken_consumes_resources() -> Result<(), TestError> {
    let setup = test_setup_with_game_tables!()?;
    let fixture = CatalogFixture::new()?;
    let user = setup
        .insert_mock_user_with_wallet(TEST_DISCORD_ID, 0, 0, 0, 200, 60)
        .await?;

    setup
        .insert_mock_relic(user.id, "Moon Blade", "SSR", 150, 400, 5)
        .await?;
    let mut developed = setup
        .insert_mock_relic(user.id, "Moon Blade", "SSR", 150, 400, 5)
        .await?;
    developed.level = 29;
    hanabi::data::RelicRepository::new(&setup.state.db)
        .save(developed)
        .await?;

    let catalog = CatalogStore::new(fixture.root());
    let relics = RelicService::new(&setup.state.db, &catalog);

    // The upgrade keeps the level 29 copy and lifts it to 30, unlocking the
    // cheapest awaken tier.
    let upgraded = relics
        .upgrade_relic(TEST_DISCORD_ID, "Moon Blade")
        .await
        .unwrap();
    assert_eq!(upgraded.level, 30);
    assert_eq!(upgraded.quality, "SSR+");

    let awakened = relics
        .awaken_relic(TEST_DISCORD_ID, "Moon Blade")
        .await
        .unwrap();
    assert_eq!(awakened.awaken, 1);

    let user = hanabi::data::UserRepository::new(&setup.state.db)
        .get_by_discord_id(TEST_DISCORD_ID)
        .await?
        .expect("user row should exist");
    assert_eq!(user.resonance_crystals, 0);

    Ok(())
}
