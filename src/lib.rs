//! Persistence-backed core of a Discord gacha role-play game.
//!
//! Players summon collectible characters, train them, battle other players'
//! rosters, equip relics, and view profile data. This crate owns the game
//! rules, the sea-orm data layer, and the operation services; the Discord
//! gateway and embed rendering live in the bot shell that consumes it.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod rules;
pub mod service;
pub mod startup;
