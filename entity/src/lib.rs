pub mod prelude;

pub mod hanabi_battle_history;
pub mod hanabi_character;
pub mod hanabi_character_template;
pub mod hanabi_relic;
pub mod hanabi_user;
