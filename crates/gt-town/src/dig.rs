//! Digging for gold.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// What came out of the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigOutcome {
    /// Nothing but dirt.
    Dirt,
    /// A find of the given amount of gold (1-20).
    Gold(i32),
}

/// Dig for gold: even odds of bare dirt, otherwise a 1-20 gold find.
pub fn dig_for_gold(rng: &mut StdRng) -> DigOutcome {
    if rng.random::<f64>() < 0.5 {
        DigOutcome::Dirt
    } else {
        DigOutcome::Gold(rng.random_range(1..=20))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(5);
        let mut rng2 = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            assert_eq!(dig_for_gold(&mut rng1), dig_for_gold(&mut rng2));
        }
    }

    #[test]
    fn finds_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            if let DigOutcome::Gold(gold) = dig_for_gold(&mut rng) {
                assert!((1..=20).contains(&gold));
            }
        }
    }

    #[test]
    fn dirt_roughly_half_the_time() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = 10_000;
        let dirt = (0..n)
            .filter(|_| dig_for_gold(&mut rng) == DigOutcome::Dirt)
            .count();
        let rate = dirt as f64 / f64::from(n);
        assert!((0.46..=0.54).contains(&rate), "dirt rate {rate}");
    }

    #[test]
    fn both_outcomes_reachable() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut dirt = false;
        let mut gold = false;
        for _ in 0..1000 {
            match dig_for_gold(&mut rng) {
                DigOutcome::Dirt => dirt = true,
                DigOutcome::Gold(_) => gold = true,
            }
        }
        assert!(dirt && gold);
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&DigOutcome::Gold(13)).unwrap();
        let outcome: DigOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, DigOutcome::Gold(13));
    }
}
