use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::rules::battle::BattleOutcome;

/// Normalized battle result tag from one side's perspective, as stored in the
/// history table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BattleResult {
    Win,
    Lose,
    Draw,
}

impl BattleResult {
    pub fn as_str(self) -> &'static str {
        match self {
            BattleResult::Win => "win",
            BattleResult::Lose => "lose",
            BattleResult::Draw => "draw",
        }
    }

    /// The same battle seen from the other side.
    pub fn inverted(self) -> Self {
        match self {
            BattleResult::Win => BattleResult::Lose,
            BattleResult::Lose => BattleResult::Win,
            BattleResult::Draw => BattleResult::Draw,
        }
    }
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved battle with its service-level rewards.
#[derive(Debug, Clone)]
pub struct BattleSummary {
    pub challenger_user: String,
    pub opponent_user: String,
    pub challenger_character: String,
    pub opponent_character: String,
    pub outcome: BattleOutcome,
    /// Result from the challenger's perspective.
    pub result: BattleResult,
    /// Gold credited to the winning side's owner, zero on a draw.
    pub gold_reward: i64,
    /// XP granted to each participating character.
    pub xp_reward: i32,
}

/// One row of a user's recent battle history.
#[derive(Debug, Clone, Serialize)]
pub struct BattleReportEntry {
    pub character_name: String,
    pub opponent_name: String,
    pub result: String,
    pub fought_at: NaiveDateTime,
}
