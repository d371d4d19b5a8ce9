use serde::Serialize;

/// Totals from feeding XP into a character for gold.
#[derive(Debug, Clone, Serialize)]
pub struct UpgradeOutcome {
    pub character_name: String,
    /// Repetitions actually paid for; may be below the requested count when
    /// gold ran short.
    pub repetitions: u32,
    pub gold_spent: i64,
    pub xp_gained: i32,
    pub leveled_up: bool,
    pub level: i32,
}
