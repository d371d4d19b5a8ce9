//! Pure game rules: elemental matchups, progression, battle resolution, and
//! gacha draws.
//!
//! Nothing in this module touches the database. Functions that need randomness
//! take an explicit `&mut StdRng` so services control seeding and tests stay
//! deterministic.

pub mod battle;
pub mod element;
pub mod gacha;
pub mod progression;
