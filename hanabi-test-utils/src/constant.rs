//! Standard constant values shared across tests.
//!
//! These are placeholder Discord identities and display names used when inserting
//! mock rows; they carry no meaning beyond being stable between test runs.

/// Discord snowflake used for the primary test player.
pub static TEST_DISCORD_ID: i64 = 90_000_000_000_000_001;

/// Discord snowflake used when a second player is needed (battles, transfers).
pub static TEST_OPPONENT_DISCORD_ID: i64 = 90_000_000_000_000_002;

/// Discord snowflake granted admin rights in authorizer tests.
pub static TEST_ADMIN_DISCORD_ID: i64 = 90_000_000_000_000_099;

/// Display name used for mock players.
pub static TEST_USER_NAME: &str = "Summoner";
