pub use super::hanabi_battle_history::Entity as HanabiBattleHistory;
pub use super::hanabi_character::Entity as HanabiCharacter;
pub use super::hanabi_character_template::Entity as HanabiCharacterTemplate;
pub use super::hanabi_relic::Entity as HanabiRelic;
pub use super::hanabi_user::Entity as HanabiUser;
