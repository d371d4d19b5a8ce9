use serde::Serialize;

/// Serializable export of one player's stored state, for the admin data view.
#[derive(Debug, Clone, Serialize)]
pub struct UserDataExport {
    pub discord_id: i64,
    pub name: String,
    pub gold: i64,
    pub gems: i64,
    pub diamonds: i64,
    pub resonance_crystals: i64,
    pub level: i32,
    pub xp: i32,
    pub affection: i32,
    pub summon_count: i32,
    pub pity_counter: i32,
    pub characters: Vec<String>,
    pub relics: Vec<String>,
}
