use serde::Serialize;

use crate::rules::gacha::Rarity;

/// One resolved pull within a summon batch.
#[derive(Debug, Clone, Serialize)]
pub struct SummonPull {
    pub name: String,
    pub potential: i32,
    #[serde(serialize_with = "serialize_rarity")]
    pub rarity: Rarity,
    /// Whether the pull converted into a boost on an already-owned instance.
    pub duplicate: bool,
    /// Whether the pity guarantee forced this pull into the top tier.
    pub guaranteed: bool,
    /// Gold granted for this pull: half the tier reward on a duplicate, zero
    /// on a fresh instance.
    pub gold_reward: i64,
}

/// Result of a summon batch.
#[derive(Debug, Clone, Serialize)]
pub struct SummonOutcome {
    pub pulls: Vec<SummonPull>,
    /// Gems debited for the whole batch, discount included.
    pub gems_spent: i64,
    /// Total gold granted across all pulls.
    pub gold_gained: i64,
    /// Pity counter value after the batch.
    pub pity_counter: i32,
}

fn serialize_rarity<S: serde::Serializer>(rarity: &Rarity, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(rarity.as_str())
}
