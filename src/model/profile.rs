use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::rules::gacha::Rarity;

/// Snapshot of a player's account for the profile command.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub gold: i64,
    pub gems: i64,
    pub diamonds: i64,
    pub resonance_crystals: i64,
    pub level: i32,
    pub xp: i32,
    pub affection: i32,
    pub summon_count: i32,
    pub roster_size: usize,
    /// Names of relics currently assigned to a character.
    pub assigned_relics: Vec<String>,
}

/// Sort order for the roster listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterSort {
    #[default]
    Potential,
    Level,
}

impl FromStr for RosterSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "potential" => Ok(RosterSort::Potential),
            "level" => Ok(RosterSort::Level),
            other => Err(Error::ParseError(other.to_string())),
        }
    }
}

/// One roster row.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub name: String,
    pub element: String,
    pub potential: i32,
    pub level: i32,
    #[serde(serialize_with = "serialize_rarity")]
    pub rarity: Rarity,
}

/// One page of a user's roster, sorted descending by the requested key.
#[derive(Debug, Clone, Serialize)]
pub struct RosterPage {
    pub entries: Vec<RosterEntry>,
    /// 1-based page number.
    pub page: usize,
    pub total_pages: usize,
    pub total_characters: usize,
}

fn serialize_rarity<S: serde::Serializer>(rarity: &Rarity, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(rarity.as_str())
}
