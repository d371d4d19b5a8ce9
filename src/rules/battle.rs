//! Round-based battle resolution.
//!
//! Damage per round is `uniform(0, 100) + potential * 0.05 + elemental bonus
//! * 20 + relic attack boost`, truncated to an integer, with a crit multiplier
//! of 1.5 rolled at `crit_chance / 100`. Both sides take their damage
//! simultaneously, so a round can drop both fighters at once.

use rand::{rngs::StdRng, Rng};

use super::element::{elemental_bonus, Element};

/// Maximum number of rounds before the battle is decided on remaining HP.
pub const MAX_ROUNDS: u32 = 10;

/// Flat stat boosts granted by an assigned relic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelicBoost {
    pub attack: i32,
    pub hit_points: i32,
    pub crit_chance: i32,
}

/// The combat-relevant stats of one battle participant.
///
/// Damage and hit points derive from potential rather than the trained attack
/// and hit point stats, which only matter for roster display and progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fighter {
    pub element: Element,
    pub potential: i32,
    pub crit_chance: i32,
    pub relic: Option<RelicBoost>,
}

/// One side's damage roll within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRoll {
    pub damage: i32,
    pub crit: bool,
}

/// Snapshot of a resolved round, with hit points after the exchange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Round {
    pub number: u32,
    pub challenger: DamageRoll,
    pub opponent: DamageRoll,
    pub challenger_hp: f64,
    pub opponent_hp: f64,
}

/// Final verdict of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    ChallengerWins,
    OpponentWins,
    Draw,
}

/// A fully resolved battle.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleOutcome {
    pub challenger_max_hp: f64,
    pub opponent_max_hp: f64,
    pub rounds: Vec<Round>,
    pub verdict: Verdict,
}

/// Effective maximum hit points of a fighter.
pub fn max_hit_points(fighter: &Fighter) -> f64 {
    let relic_bonus = fighter.relic.map_or(0, |relic| relic.hit_points);

    1000.0 + f64::from(fighter.potential) / 2.0 + f64::from(relic_bonus)
}

fn roll_damage(fighter: &Fighter, bonus: f64, rng: &mut StdRng) -> DamageRoll {
    let relic_attack = fighter.relic.map_or(0, |relic| relic.attack);

    let raw = rng.random_range(0.0..100.0)
        + f64::from(fighter.potential) * 0.05
        + bonus * 20.0
        + f64::from(relic_attack);
    let mut damage = raw as i32;

    let crit_probability = (f64::from(fighter.crit_chance) / 100.0).clamp(0.0, 1.0);
    let crit = rng.random_bool(crit_probability);
    if crit {
        damage = (f64::from(damage) * 1.5) as i32;
    }

    DamageRoll { damage, crit }
}

/// Resolves a battle between two fighters.
///
/// # Behavior
/// Rounds run until either side's hit points reach zero or [`MAX_ROUNDS`]
/// elapse. A round where both sides drop is a draw; otherwise the verdict
/// goes to the side with more remaining hit points, with an exact tie also
/// counting as a draw.
pub fn resolve(challenger: &Fighter, opponent: &Fighter, rng: &mut StdRng) -> BattleOutcome {
    let challenger_max_hp = max_hit_points(challenger);
    let opponent_max_hp = max_hit_points(opponent);
    let mut challenger_hp = challenger_max_hp;
    let mut opponent_hp = opponent_max_hp;

    let challenger_bonus = elemental_bonus(challenger.element, opponent.element);
    let opponent_bonus = elemental_bonus(opponent.element, challenger.element);

    let mut rounds = Vec::new();
    let mut number = 1;

    while challenger_hp > 0.0 && opponent_hp > 0.0 && number <= MAX_ROUNDS {
        let challenger_roll = roll_damage(challenger, challenger_bonus, rng);
        let opponent_roll = roll_damage(opponent, opponent_bonus, rng);

        // Simultaneous exchange: both pools drop using damage computed before
        // either side is reduced.
        opponent_hp -= f64::from(challenger_roll.damage);
        challenger_hp -= f64::from(opponent_roll.damage);

        rounds.push(Round {
            number,
            challenger: challenger_roll,
            opponent: opponent_roll,
            challenger_hp,
            opponent_hp,
        });
        number += 1;
    }

    let verdict = if challenger_hp <= 0.0 && opponent_hp <= 0.0 {
        Verdict::Draw
    } else if challenger_hp > opponent_hp {
        Verdict::ChallengerWins
    } else if opponent_hp > challenger_hp {
        Verdict::OpponentWins
    } else {
        Verdict::Draw
    };

    BattleOutcome {
        challenger_max_hp,
        opponent_max_hp,
        rounds,
        verdict,
    }
}
