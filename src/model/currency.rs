use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The four player-held currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// Earned from summons, battles, and admin grants; spent on upgrades.
    Gold,
    /// Spent on character summons.
    Gems,
    /// Spent on relic summons and inheritance.
    Diamonds,
    /// Spent on relic awakening.
    ResonanceCrystals,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Gold => "gold",
            Currency::Gems => "gems",
            Currency::Diamonds => "diamonds",
            Currency::ResonanceCrystals => "resonance crystals",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(Currency::Gold),
            "gems" | "gem" => Ok(Currency::Gems),
            "diamonds" | "diamond" => Ok(Currency::Diamonds),
            "resonance crystals" | "resonance_crystals" | "crystals" => {
                Ok(Currency::ResonanceCrystals)
            }
            other => Err(Error::ParseError(other.to_string())),
        }
    }
}
