//! Outcome values returned by service operations.
//!
//! Services compute one of these per command; the presentation layer renders
//! them into chat messages. They carry no behavior beyond serialization.

pub mod admin;
pub mod affection;
pub mod battle;
pub mod currency;
pub mod profile;
pub mod relic;
pub mod summon;
pub mod train;
pub mod upgrade;
