//! Brawl encounters.
//!
//! Tough towns stay quiet toward strangers two thirds of the time, but the
//! brawls that do break out there are hard to win. Mild towns pick fights
//! more readily and fold more readily too. A sword ends any brawl before it
//! starts.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Chance that no trouble turns up, by town toughness.
pub fn no_trouble_chance(tough: bool) -> f64 {
    if tough { 0.66 } else { 0.33 }
}

/// How a search for trouble played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TroubleOutcome {
    /// Nobody took the bait.
    NoTrouble,
    /// The opponent saw the sword and handed over gold without a fight.
    Surrender {
        /// Gold handed over (1-10).
        gold: i32,
    },
    /// The hunter won the brawl and took gold.
    Won {
        /// Gold won (1-10).
        gold: i32,
    },
    /// The hunter lost the brawl and paid gold.
    Lost {
        /// Gold paid (1-10).
        gold: i32,
    },
}

impl TroubleOutcome {
    /// The gold delta this outcome applies to the hunter.
    pub fn gold_delta(self) -> i32 {
        match self {
            Self::NoTrouble => 0,
            Self::Surrender { gold } | Self::Won { gold } => gold,
            Self::Lost { gold } => -gold,
        }
    }
}

/// Look for a brawl.
///
/// The draw order is part of the contract: one uniform draw decides whether
/// trouble turns up at all; if it does, the stake is drawn (1-10 gold); an
/// armed hunter forces a surrender with no further draw, otherwise a final
/// draw against the same chance decides the brawl.
pub fn look_for_trouble(tough: bool, armed_with_sword: bool, rng: &mut StdRng) -> TroubleOutcome {
    let chance = no_trouble_chance(tough);
    if rng.random::<f64>() <= chance {
        return TroubleOutcome::NoTrouble;
    }

    let gold = rng.random_range(1..=10);
    if armed_with_sword {
        TroubleOutcome::Surrender { gold }
    } else if rng.random::<f64>() > chance {
        TroubleOutcome::Won { gold }
    } else {
        TroubleOutcome::Lost { gold }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn chances_by_toughness() {
        assert!((no_trouble_chance(true) - 0.66).abs() < f64::EPSILON);
        assert!((no_trouble_chance(false) - 0.33).abs() < f64::EPSILON);
    }

    #[test]
    fn deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(
                look_for_trouble(true, false, &mut rng1),
                look_for_trouble(true, false, &mut rng2)
            );
        }
    }

    #[test]
    fn stakes_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            match look_for_trouble(false, false, &mut rng) {
                TroubleOutcome::NoTrouble => {}
                TroubleOutcome::Surrender { gold }
                | TroubleOutcome::Won { gold }
                | TroubleOutcome::Lost { gold } => {
                    assert!((1..=10).contains(&gold));
                }
            }
        }
    }

    #[test]
    fn a_sword_never_loses() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..2000 {
            let outcome = look_for_trouble(true, true, &mut rng);
            assert!(
                matches!(
                    outcome,
                    TroubleOutcome::NoTrouble | TroubleOutcome::Surrender { .. }
                ),
                "armed hunter got {outcome:?}"
            );
            assert!(outcome.gold_delta() >= 0);
        }
    }

    #[test]
    fn all_unarmed_outcomes_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..5000 {
            let outcome = look_for_trouble(false, false, &mut rng);
            seen.insert(std::mem::discriminant(&outcome));
        }
        assert_eq!(seen.len(), 3, "expected quiet, won, and lost outcomes");
    }

    #[test]
    fn quiet_rate_tracks_toughness() {
        let mut rng = StdRng::seed_from_u64(9);
        let n = 10_000;

        let quiet = (0..n)
            .filter(|_| look_for_trouble(true, false, &mut rng) == TroubleOutcome::NoTrouble)
            .count();
        let rate = quiet as f64 / f64::from(n);
        assert!((0.62..=0.70).contains(&rate), "tough quiet rate {rate}");

        let quiet = (0..n)
            .filter(|_| look_for_trouble(false, false, &mut rng) == TroubleOutcome::NoTrouble)
            .count();
        let rate = quiet as f64 / f64::from(n);
        assert!((0.29..=0.37).contains(&rate), "mild quiet rate {rate}");
    }

    #[test]
    fn tough_brawls_are_harder_to_win() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut won = 0u32;
        let mut fought = 0u32;
        for _ in 0..20_000 {
            match look_for_trouble(true, false, &mut rng) {
                TroubleOutcome::Won { .. } => {
                    won += 1;
                    fought += 1;
                }
                TroubleOutcome::Lost { .. } => fought += 1,
                _ => {}
            }
        }
        let rate = f64::from(won) / f64::from(fought);
        assert!((0.28..=0.40).contains(&rate), "tough win rate {rate}");
    }

    #[test]
    fn gold_delta_signs() {
        assert_eq!(TroubleOutcome::NoTrouble.gold_delta(), 0);
        assert_eq!(TroubleOutcome::Surrender { gold: 4 }.gold_delta(), 4);
        assert_eq!(TroubleOutcome::Won { gold: 7 }.gold_delta(), 7);
        assert_eq!(TroubleOutcome::Lost { gold: 7 }.gold_delta(), -7);
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&TroubleOutcome::Won { gold: 6 }).unwrap();
        let outcome: TroubleOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, TroubleOutcome::Won { gold: 6 });
    }

    proptest! {
        #[test]
        fn gold_delta_is_bounded(seed in any::<u64>(), tough in any::<bool>(), armed in any::<bool>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = look_for_trouble(tough, armed, &mut rng);
            prop_assert!((-10..=10).contains(&outcome.gold_delta()));
        }
    }
}
