use serde::Serialize;

/// Stat gains from one training session.
#[derive(Debug, Clone, Serialize)]
pub struct TrainOutcome {
    pub character_name: String,
    pub attack_gain: i32,
    pub hit_points_gain: i32,
    pub crit_gain: i32,
    pub xp_gain: i32,
    pub leveled_up: bool,
    pub level: i32,
}
