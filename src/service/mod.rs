//! Service layer: one module per user-facing operation.
//!
//! Services load rows through the repositories in [`crate::data`], run the
//! pure rules in [`crate::rules`], persist the result, and return an outcome
//! value from [`crate::model`]. Every precondition (balance, cooldown,
//! eligibility, authorization) is checked before the first write, so a
//! returned error always means nothing was mutated.

pub mod admin;
pub mod affection;
pub mod battle;
pub mod catalog;
pub mod profile;
pub mod relic;
pub mod summon;
pub mod training;
pub mod upgrade;

use crate::rules::progression::Growth;

/// Copies the progression columns out of a character row.
pub(crate) fn growth_of(character: &entity::hanabi_character::Model) -> Growth {
    Growth {
        level: character.level,
        xp: character.xp,
        attack: character.attack,
        hit_points: character.hit_points,
        crit_chance: character.crit_chance,
    }
}

/// Writes normalized progression columns back onto a character row.
pub(crate) fn write_growth(character: &mut entity::hanabi_character::Model, growth: &Growth) {
    character.level = growth.level;
    character.xp = growth.xp;
    character.attack = growth.attack;
    character.hit_points = growth.hit_points;
    character.crit_chance = growth.crit_chance;
}

/// Case-insensitive lookup by character name within an owned roster.
pub(crate) fn find_character<'a>(
    roster: &'a [entity::hanabi_character::Model],
    name: &str,
) -> Option<&'a entity::hanabi_character::Model> {
    roster
        .iter()
        .find(|character| character.name.eq_ignore_ascii_case(name))
}

/// Case-insensitive lookup by relic name within an owned inventory.
pub(crate) fn find_relic<'a>(
    inventory: &'a [entity::hanabi_relic::Model],
    name: &str,
) -> Option<&'a entity::hanabi_relic::Model> {
    inventory
        .iter()
        .find(|relic| relic.name.eq_ignore_ascii_case(name))
}
