use hanabi::{
    catalog::CatalogStore,
    service::{
        catalog::CatalogSyncService, profile::ProfileService, summon::SummonService,
        training::TrainingService, upgrade::UpgradeService,
    },
};
use hanabi_test_utils::constant::TEST_DISCORD_ID;
use hanabi_test_utils::prelude::*;

/// Expect a catalog sync, a summon batch, training, and upgrading to leave a
/// consistent profile behind.
#[tokio::test]
async fn summon_train_upgrade_round_trip() -> Result<(), TestError> {
    let setup = test_setup_with_game_tables!()?;
    let fixture = CatalogFixture::new()?;
    fixture.write_character("Ember", "Fire", 4500)?;

    let catalog = CatalogStore::new(fixture.root());
    CatalogSyncService::new(&setup.state.db, &catalog)
        .sync_templates()
        .await
        .unwrap();

    setup
        .insert_mock_user_with_wallet(TEST_DISCORD_ID, 0, 50, 0, 0, 1)
        .await?;

    // Two pulls on a one-template pool: the second converts into a duplicate
    // boost.
    let summon = SummonService::new(&setup.state.db)
        .summon(TEST_DISCORD_ID, "Summoner", 2)
        .await
        .unwrap();

    assert_eq!(summon.gems_spent, 20);
    assert!(!summon.pulls[0].duplicate);
    assert!(summon.pulls[1].duplicate);
    // Only the duplicate pays gold: half the 920 tier reward.
    assert_eq!(summon.pulls[0].gold_reward, 0);
    assert_eq!(summon.gold_gained, 460);

    let train = TrainingService::new(&setup.state.db)
        .train(TEST_DISCORD_ID, "Summoner", Some("Ember"))
        .await
        .unwrap();
    assert_eq!(train.character_name, "Ember");

    let upgrade = UpgradeService::new(&setup.state.db)
        .upgrade(TEST_DISCORD_ID, "Summoner", "Ember", 3)
        .await
        .unwrap();
    assert!(upgrade.repetitions >= 1);
    assert!(upgrade.gold_spent <= 460);

    let profile = ProfileService::new(&setup.state.db)
        .profile(TEST_DISCORD_ID)
        .await
        .unwrap();
    assert_eq!(profile.roster_size, 1);
    assert_eq!(profile.gems, 30);
    assert_eq!(profile.summon_count, 2);
    assert_eq!(profile.gold, 460 - upgrade.gold_spent);

    Ok(())
}
