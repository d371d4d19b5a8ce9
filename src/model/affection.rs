use serde::Serialize;

/// Result of a bonding session.
#[derive(Debug, Clone, Serialize)]
pub struct BondOutcome {
    /// The companion character the session was spent with.
    pub companion_name: String,
    /// The user's affection after the +5 gain.
    pub affection: i32,
}
