use hanabi::service::{battle::BattleService, profile::ProfileService};
use hanabi_test_utils::constant::{TEST_DISCORD_ID, TEST_OPPONENT_DISCORD_ID};
use hanabi_test_utils::prelude::*;

/// Expect a lopsided battle to pay the winner, log both sides, and show up in
/// the battle report.
#[tokio::test]
async fn battle_pays_rewards_and_fills_the_report() -> Result<(), TestError> {
    let setup = test_setup_with_game_tables!()?;
    let user = setup.insert_mock_user(TEST_DISCORD_ID).await?;
    let rival = setup.insert_mock_user(TEST_OPPONENT_DISCORD_ID).await?;
    setup
        .insert_mock_character(user.id, "Aurelia", "Light", 9000)
        .await?;
    setup.insert_mock_character(rival.id, "Yuki", "Water", 0).await?;

    let battles = BattleService::new(&setup.state.db);

    let summary = battles
        .battle(
            TEST_DISCORD_ID,
            "Summoner",
            None,
            Some(TEST_OPPONENT_DISCORD_ID),
        )
        .await
        .unwrap();

    assert_eq!(summary.result.as_str(), "win");
    assert_eq!(summary.challenger_character, "Aurelia");
    assert_eq!(summary.opponent_character, "Yuki");
    assert!(!summary.outcome.rounds.is_empty());

    let profile = ProfileService::new(&setup.state.db)
        .profile(TEST_DISCORD_ID)
        .await
        .unwrap();
    assert_eq!(profile.gold, 500 + summary.gold_reward);

    let report = battles.battle_report(TEST_DISCORD_ID).await.unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].result, "win");

    let rival_report = battles
        .battle_report(TEST_OPPONENT_DISCORD_ID)
        .await
        .unwrap();
    assert_eq!(rival_report.len(), 1);
    assert_eq!(rival_report[0].result, "lose");
    assert_eq!(rival_report[0].opponent_name, "Aurelia");

    Ok(())
}

/// Expect the random matchmaker to find the only other roster.
#[tokio::test]
async fn random_matchmaking_finds_the_only_candidate() -> Result<(), TestError> {
    let setup = test_setup_with_game_tables!()?;
    let user = setup.insert_mock_user(TEST_DISCORD_ID).await?;
    let rival = setup.insert_mock_user(TEST_OPPONENT_DISCORD_ID).await?;
    setup
        .insert_mock_character(user.id, "Aurelia", "Light", 9000)
        .await?;
    setup.insert_mock_character(rival.id, "Yuki", "Water", 0).await?;

    let summary = BattleService::new(&setup.state.db)
        .battle(TEST_DISCORD_ID, "Summoner", None, None)
        .await
        .unwrap();

    assert_eq!(summary.opponent_character, "Yuki");

    Ok(())
}
