//! Cross-service scenarios exercising whole command flows against one
//! in-memory store.

mod admin_reset;
mod battle_rewards;
mod relic_lifecycle;
mod summon_lifecycle;
