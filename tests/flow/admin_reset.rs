use hanabi::{
    auth::Authorizer,
    catalog::CatalogStore,
    error::{auth::AuthError, Error},
    model::currency::Currency,
    service::{admin::AdminService, profile::ProfileService},
};
use hanabi_test_utils::constant::{
    TEST_ADMIN_DISCORD_ID, TEST_DISCORD_ID, TEST_OPPONENT_DISCORD_ID,
};
use hanabi_test_utils::prelude::*;

/// Expect the global reset to restore every profile and empty every roster.
#[tokio::test]
async fn global_reset_restores_every_profile() -> Result<(), TestError> {
    let setup = test_setup_with_game_tables!()?;
    let fixture = CatalogFixture::new()?;
    let user = setup
        .insert_mock_user_with_wallet(TEST_DISCORD_ID, 9000, 300, 40, 10, 70)
        .await?;
    let rival = setup
        .insert_mock_user_with_wallet(TEST_OPPONENT_DISCORD_ID, 100, 10, 0, 0, 2)
        .await?;
    setup
        .insert_mock_character(user.id, "Aurelia", "Light", 5200)
        .await?;
    setup.insert_mock_character(rival.id, "Yuki", "Water", 3000).await?;

    let authorizer = Authorizer::new([TEST_ADMIN_DISCORD_ID]);
    let catalog = CatalogStore::new(fixture.root());
    let admin = AdminService::new(&setup.state.db, &authorizer, &catalog);

    let count = admin
        .reset_all_profiles(TEST_ADMIN_DISCORD_ID)
        .await
        .unwrap();
    assert_eq!(count, 2);

    let profiles = ProfileService::new(&setup.state.db);
    for discord_id in [TEST_DISCORD_ID, TEST_OPPONENT_DISCORD_ID] {
        let profile = profiles.profile(discord_id).await.unwrap();
        assert_eq!(profile.gold, 500);
        assert_eq!(profile.gems, 50);
        assert_eq!(profile.level, 1);
        assert_eq!(profile.roster_size, 0);
    }

    Ok(())
}

/// Expect a non-admin caller to be rejected before any grant lands.
#[tokio::test]
async fn non_admin_grant_is_rejected() -> Result<(), TestError> {
    let setup = test_setup_with_game_tables!()?;
    let fixture = CatalogFixture::new()?;

    let authorizer = Authorizer::new([TEST_ADMIN_DISCORD_ID]);
    let catalog = CatalogStore::new(fixture.root());
    let admin = AdminService::new(&setup.state.db, &authorizer, &catalog);

    let result = admin
        .give_currency(
            TEST_DISCORD_ID,
            TEST_DISCORD_ID,
            "Summoner",
            Currency::Gems,
            1_000,
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::Unauthorized(_)))
    ));

    Ok(())
}
