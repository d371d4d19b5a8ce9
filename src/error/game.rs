use thiserror::Error;

use crate::model::currency::Currency;

/// Gameplay rule violations surfaced to the caller as outcomes, never as panics.
///
/// Every variant corresponds to a precondition checked before any row is mutated,
/// so a returned `GameError` always means the operation left no partial state.
#[derive(Error, Debug)]
pub enum GameError {
    /// A battle side has no eligible fighter, or the requested opponent is invalid.
    #[error("Invalid participant: {0}")]
    InvalidParticipant(String),
    /// Balance below the required cost, checked before any debit.
    #[error("Insufficient {currency}: requires {required}, has {available}")]
    InsufficientCurrency {
        currency: Currency,
        required: i64,
        available: i64,
    },
    /// A referenced user, character, or relic does not exist.
    #[error("{0} was not found")]
    NotFound(String),
    /// A repeatable action was attempted before its cooldown window elapsed.
    #[error("On cooldown for another {remaining_minutes} minutes")]
    OnCooldown { remaining_minutes: i64 },
    /// The player has not reached the level this feature unlocks at.
    #[error("Locked until level {required}, currently level {current}")]
    LevelLocked { required: i32, current: i32 },
    /// The summon pool has no templates to draw from.
    #[error("No character templates available to summon from")]
    EmptyTemplatePool,
    /// The relic catalog has no records to draw from.
    #[error("No relic records available to summon from")]
    EmptyRelicPool,
    /// A relic upgrade was requested without a second copy to consume.
    #[error("At least 2 copies of {0:?} are required to upgrade")]
    MissingDuplicate(String),
}
