use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// One relic created by a relic summon batch.
#[derive(Debug, Clone, Serialize)]
pub struct RelicPull {
    pub name: String,
    pub quality: String,
    pub attack_boost: i32,
    pub hit_points_boost: i32,
    pub crit_boost: i32,
}

/// Result of a relic summon batch.
#[derive(Debug, Clone, Serialize)]
pub struct RelicSummonOutcome {
    pub pulls: Vec<RelicPull>,
    pub diamonds_spent: i64,
}

/// Which trait an inheritance transfer copies between relics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InheritKind {
    Quality,
    Awaken,
}

impl InheritKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InheritKind::Quality => "quality",
            InheritKind::Awaken => "awaken",
        }
    }
}

impl fmt::Display for InheritKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InheritKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quality" => Ok(InheritKind::Quality),
            "awaken" => Ok(InheritKind::Awaken),
            other => Err(Error::ParseError(other.to_string())),
        }
    }
}
