//! Weighted summon draws, pity, rarity bands, and cost rules.

use std::fmt;

use rand::{rngs::StdRng, Rng};

/// Gem cost of a single summon.
pub const SUMMON_COST: i64 = 10;

/// Batch sizes that are an exact multiple of this get a 10% discount.
pub const DISCOUNT_THRESHOLD: u32 = 10;

/// Pity counter value at which the next pull is forced to the top tier.
pub const PITY_THRESHOLD: i32 = 19;

/// Potential at or above which a template counts as top tier.
pub const TOP_TIER_POTENTIAL: i32 = 5000;

const BASE_WEIGHT: i32 = 10_000;

/// Rarity band of a template, derived from its potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Ssr,
    Sr,
    R,
    N,
}

impl Rarity {
    pub fn from_potential(potential: i32) -> Self {
        if potential >= TOP_TIER_POTENTIAL {
            Rarity::Ssr
        } else if potential >= 4000 {
            Rarity::Sr
        } else if potential >= 3000 {
            Rarity::R
        } else {
            Rarity::N
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Ssr => "SSR",
            Rarity::Sr => "SR",
            Rarity::R => "R",
            Rarity::N => "N",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draw weight of a template: higher potential, rarer, floored at 10% of the
/// base weight.
pub fn weight(potential: i32) -> i32 {
    (BASE_WEIGHT - potential).max(BASE_WEIGHT / 10)
}

/// Total gem cost of a summon batch.
pub fn summon_cost(amount: u32) -> i64 {
    let cost = i64::from(amount) * SUMMON_COST;

    if amount % DISCOUNT_THRESHOLD == 0 {
        (cost as f64 * 0.9) as i64
    } else {
        cost
    }
}

/// Gold granted for pulling a template of the given potential, also the basis
/// of the duplicate refund.
pub fn tier_reward(potential: i32) -> i64 {
    const TIERS: [(i32, i64); 9] = [
        (5200, 1500),
        (5000, 1200),
        (4500, 920),
        (4000, 780),
        (3500, 650),
        (3000, 500),
        (2500, 300),
        (2000, 200),
        (1500, 100),
    ];

    for (threshold, reward) in TIERS {
        if potential >= threshold {
            return reward;
        }
    }

    100
}

/// One decided summon pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// Index into the potential slice passed to [`draw`].
    pub index: usize,
    /// Pity counter value after this pull.
    pub pity_after: i32,
    /// Whether the pity guarantee forced this pull into the top tier.
    pub forced: bool,
}

/// Decides one summon pull from a pool of template potentials.
///
/// # Behavior
/// `pity` counts pulls since the last guaranteed top-tier result. At
/// [`PITY_THRESHOLD`] the pull is drawn uniformly from the top-tier subset
/// (the full pool when that subset is empty) and the counter resets to zero.
/// Otherwise a draw weighted by [`weight`] runs and the counter increments;
/// a naturally drawn top-tier template does not reset it.
///
/// # Panics
/// Panics when `potentials` is empty; callers verify the pool first.
pub fn draw(potentials: &[i32], pity: i32, rng: &mut StdRng) -> Draw {
    if pity >= PITY_THRESHOLD {
        let top_tier: Vec<usize> = (0..potentials.len())
            .filter(|&index| potentials[index] >= TOP_TIER_POTENTIAL)
            .collect();
        let pool = if top_tier.is_empty() {
            (0..potentials.len()).collect()
        } else {
            top_tier
        };

        let index = pool[rng.random_range(0..pool.len())];

        return Draw {
            index,
            pity_after: 0,
            forced: true,
        };
    }

    let weights: Vec<i64> = potentials
        .iter()
        .map(|&potential| i64::from(weight(potential)))
        .collect();
    let total: i64 = weights.iter().sum();

    let mut roll = rng.random_range(0..total);
    let mut index = potentials.len() - 1;
    for (candidate, candidate_weight) in weights.iter().enumerate() {
        if roll < *candidate_weight {
            index = candidate;
            break;
        }
        roll -= *candidate_weight;
    }

    Draw {
        index,
        pity_after: pity + 1,
        forced: false,
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{draw, summon_cost, tier_reward, weight, Rarity, PITY_THRESHOLD};

    /// Expect the weight to fall with potential and floor at 1000.
    #[test]
    fn weight_floors_at_ten_percent() {
        assert_eq!(weight(0), 10_000);
        assert_eq!(weight(5000), 5000);
        assert_eq!(weight(9000), 1000);
        assert_eq!(weight(9500), 1000);
        assert_eq!(weight(12_000), 1000);
    }

    /// Expect flat pricing except on exact multiples of ten.
    #[test]
    fn cost_discounts_exact_multiples_of_ten() {
        assert_eq!(summon_cost(1), 10);
        assert_eq!(summon_cost(9), 90);
        assert_eq!(summon_cost(10), 90);
        assert_eq!(summon_cost(11), 110);
        assert_eq!(summon_cost(20), 180);
        assert_eq!(summon_cost(0), 0);
    }

    /// Expect the reward table thresholds to apply from the top down.
    #[test]
    fn tier_reward_thresholds() {
        assert_eq!(tier_reward(5300), 1500);
        assert_eq!(tier_reward(5200), 1500);
        assert_eq!(tier_reward(5100), 1200);
        assert_eq!(tier_reward(4500), 920);
        assert_eq!(tier_reward(3200), 500);
        assert_eq!(tier_reward(1500), 100);
        assert_eq!(tier_reward(800), 100);
    }

    /// Expect rarity bands at the documented potential cutoffs.
    #[test]
    fn rarity_bands() {
        assert_eq!(Rarity::from_potential(5000), Rarity::Ssr);
        assert_eq!(Rarity::from_potential(4999), Rarity::Sr);
        assert_eq!(Rarity::from_potential(4000), Rarity::Sr);
        assert_eq!(Rarity::from_potential(3999), Rarity::R);
        assert_eq!(Rarity::from_potential(2999), Rarity::N);
    }

    mod draw {
        use super::*;

        /// Expect a sub-threshold counter to increment and never force.
        #[test]
        fn weighted_pull_increments_pity() {
            let pool = [1000, 2000, 3000];

            let result = draw(&pool, 5, &mut StdRng::seed_from_u64(1));

            assert!(!result.forced);
            assert_eq!(result.pity_after, 6);
            assert!(result.index < pool.len());
        }

        /// Expect the pull at the threshold to come from the top tier and
        /// reset the counter.
        #[test]
        fn threshold_pull_is_forced_to_top_tier() {
            let pool = [1000, 6000, 2000];

            let result = draw(&pool, PITY_THRESHOLD, &mut StdRng::seed_from_u64(2));

            assert!(result.forced);
            assert_eq!(result.index, 1);
            assert_eq!(result.pity_after, 0);
        }

        /// Expect the forced pull to fall back to the full pool when no
        /// template reaches the top tier.
        #[test]
        fn forced_pull_falls_back_to_full_pool() {
            let pool = [1000, 2000];

            let result = draw(&pool, PITY_THRESHOLD, &mut StdRng::seed_from_u64(3));

            assert!(result.forced);
            assert!(result.index < pool.len());
            assert_eq!(result.pity_after, 0);
        }

        /// Expect a naturally drawn top-tier template to leave the counter
        /// counting.
        #[test]
        fn natural_top_tier_does_not_reset_pity() {
            // Single-template pool, every weighted pull lands on the SSR.
            let pool = [9500];

            let result = draw(&pool, 3, &mut StdRng::seed_from_u64(4));

            assert!(!result.forced);
            assert_eq!(result.index, 0);
            assert_eq!(result.pity_after, 4);
        }

        /// Expect the twentieth consecutive pull to be the guaranteed one.
        #[test]
        fn twentieth_pull_is_guaranteed() {
            let pool = [1000, 5500];
            let mut rng = StdRng::seed_from_u64(5);
            let mut pity = 0;

            for _ in 0..PITY_THRESHOLD {
                let result = draw(&pool, pity, &mut rng);
                assert!(!result.forced);
                pity = result.pity_after;
            }

            let twentieth = draw(&pool, pity, &mut rng);

            assert!(twentieth.forced);
            assert_eq!(twentieth.index, 1);
            assert_eq!(twentieth.pity_after, 0);
        }

        /// Expect heavier weights to dominate a seeded sample.
        #[test]
        fn weighted_draw_favors_low_potential() {
            let pool = [0, 9000];
            let mut rng = StdRng::seed_from_u64(6);
            let mut counts = [0u32; 2];

            for _ in 0..2_000 {
                let result = draw(&pool, 0, &mut rng);
                counts[result.index] += 1;
            }

            // Weights are 10000 to 1000, roughly ten draws to one.
            assert!(counts[0] > counts[1] * 5);
        }
    }
}
