//! Character elements and the matchup chart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The six character elements.
///
/// Four form a cycle (Fire beats Earth, Water beats Fire, Earth beats
/// Lightning, Lightning beats Water); Light and Dark counter each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Lightning,
    Light,
    Dark,
}

impl Element {
    /// The element this element is strong against.
    pub fn counters(self) -> Element {
        match self {
            Element::Fire => Element::Earth,
            Element::Water => Element::Fire,
            Element::Earth => Element::Lightning,
            Element::Lightning => Element::Water,
            Element::Light => Element::Dark,
            Element::Dark => Element::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Lightning => "Lightning",
            Element::Light => "Light",
            Element::Dark => "Dark",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Element::Fire,
            Element::Water,
            Element::Earth,
            Element::Lightning,
            Element::Light,
            Element::Dark,
        ]
        .into_iter()
        .find(|element| s.eq_ignore_ascii_case(element.as_str()))
        .ok_or_else(|| Error::ParseError(s.to_string()))
    }
}

/// Damage bonus for `element` fighting against `opposing`.
///
/// Advantage yields +0.1 and disadvantage -0.1; unrelated pairs yield 0.
/// Disadvantage is checked first, so the mutually countering Light/Dark pair
/// resolves to -0.1 for both sides.
pub fn elemental_bonus(element: Element, opposing: Element) -> f64 {
    if element == opposing.counters() {
        return -0.1;
    }
    if element.counters() == opposing {
        return 0.1;
    }

    0.0
}
