//! XP accumulation and level-up stat growth.

/// Character level cap.
pub const LEVEL_CAP: i32 = 100;

/// Crit chance ceiling enforced by the duplicate-conversion boost.
pub const DUPLICATE_CRIT_CAP: i32 = 20;

/// The progression columns of a character, detached from its row.
///
/// Services copy these fields out of a fetched model, run the rules, and write
/// the result back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Growth {
    pub level: i32,
    pub xp: i32,
    pub attack: i32,
    pub hit_points: i32,
    pub crit_chance: i32,
}

/// Result of feeding XP through [`apply_xp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub leveled_up: bool,
    pub level: i32,
}

/// XP required to clear the given level.
pub fn xp_to_next_level(level: i32) -> i32 {
    level * 100
}

/// Adds XP and rolls any overflow into level-ups.
///
/// Each level gained grants +1 attack, +5 hit points, and +1 crit chance.
/// After normalization the remaining XP is below [`xp_to_next_level`] unless
/// the character sits at [`LEVEL_CAP`], where XP accumulates without further
/// levels. Zero or negative amounts leave the stats untouched.
pub fn apply_xp(growth: &mut Growth, amount: i32) -> LevelUp {
    if amount <= 0 {
        return LevelUp {
            leveled_up: false,
            level: growth.level,
        };
    }

    growth.xp += amount;

    let mut leveled_up = false;
    while growth.xp >= xp_to_next_level(growth.level) && growth.level < LEVEL_CAP {
        growth.xp -= xp_to_next_level(growth.level);
        growth.level += 1;
        growth.attack += 1;
        growth.hit_points += 5;
        growth.crit_chance += 1;
        leveled_up = true;
    }

    LevelUp {
        leveled_up,
        level: growth.level,
    }
}

/// Applies the fixed boost a duplicate summon converts into.
///
/// +10 attack, +100 hit points, +1 crit chance capped at
/// [`DUPLICATE_CRIT_CAP`], then 50 bonus XP normalized through [`apply_xp`].
pub fn apply_duplicate_boost(growth: &mut Growth) -> LevelUp {
    growth.attack += 10;
    growth.hit_points += 100;
    growth.crit_chance = (growth.crit_chance + 1).min(DUPLICATE_CRIT_CAP);

    apply_xp(growth, 50)
}
