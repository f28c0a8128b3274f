//! Rolling a pool and the per-die results.

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::{DicePool, DieFace, ResolvedDie};

/// A source of die results.
///
/// Implementations must return a value in `1..=face.sides()`.
pub trait RandomSource {
    /// Roll one die of the given face.
    fn roll_face(&mut self, face: DieFace) -> u32;
}

impl RandomSource for StdRng {
    fn roll_face(&mut self, face: DieFace) -> u32 {
        self.random_range(1..=face.sides())
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll_face(&mut self, face: DieFace) -> u32 {
        (**self).roll_face(face)
    }
}

/// A scripted source that replays fixed values.
///
/// Values are clamped into the rolled die's range and the script cycles
/// once exhausted. An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct FixedRolls {
    values: Vec<u32>,
    next: usize,
}

impl FixedRolls {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for FixedRolls {
    fn roll_face(&mut self, face: DieFace) -> u32 {
        if self.values.is_empty() {
            return 1;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(1, face.sides())
    }
}

/// The result of rolling a single die in a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DieRoll {
    /// The value rolled (1 to face sides).
    pub value: u32,
    /// The die that was rolled.
    pub die: ResolvedDie,
    /// For the echo of a doubled trait, the pool index of the trait die.
    pub echo_of: Option<usize>,
}

impl DieRoll {
    /// Returns true if this die rolled a 1.
    pub fn is_hitch(&self) -> bool {
        self.value == 1
    }
}

/// Roll every die in the pool, preserving pool order.
pub fn roll<R: RandomSource + ?Sized>(pool: &DicePool, rng: &mut R) -> Vec<DieRoll> {
    let rolls: Vec<DieRoll> = pool
        .iter()
        .map(|(die, echo_of)| DieRoll {
            value: rng.roll_face(die.face),
            die: die.clone(),
            echo_of,
        })
        .collect();
    tracing::debug!(
        values = ?rolls.iter().map(|r| r.value).collect::<Vec<_>>(),
        "rolled pool"
    );
    rolls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TraitCategory;
    use rand::SeedableRng;

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DieFace::LADDER
            .iter()
            .fold(DicePool::new(), |pool, face| pool.add_die(*face).add_die(*face));
        for _ in 0..50 {
            for r in roll(&pool, &mut rng) {
                assert!((1..=r.die.face.sides()).contains(&r.value));
            }
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::new().add_die(DieFace::D12).add_die(DieFace::D8).add_die(DieFace::D4);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(roll(&pool, &mut rng1), roll(&pool, &mut rng2));
    }

    #[test]
    fn roll_preserves_pool_order_and_echoes() {
        let strength =
            ResolvedDie::from_trait(DieFace::D8, TraitCategory::Attribute, "strength", None);
        let pool = DicePool::new().add_die(DieFace::D6).add_doubled(strength.clone());
        let mut rng = FixedRolls::new([3, 5, 7]);

        let rolls = roll(&pool, &mut rng);
        assert_eq!(rolls.len(), 3);
        assert_eq!(rolls[0].value, 3);
        assert_eq!(rolls[1].value, 5);
        assert_eq!(rolls[1].die, strength);
        assert_eq!(rolls[2].value, 7);
        assert_eq!(rolls[2].echo_of, Some(1));
    }

    #[test]
    fn fixed_rolls_clamp_and_cycle() {
        let mut rng = FixedRolls::new([12, 0]);
        assert_eq!(rng.roll_face(DieFace::D6), 6);
        assert_eq!(rng.roll_face(DieFace::D6), 1);
        assert_eq!(rng.roll_face(DieFace::D12), 12);
    }

    #[test]
    fn empty_script_rolls_ones() {
        let mut rng = FixedRolls::default();
        assert_eq!(rng.roll_face(DieFace::D10), 1);
    }

    #[test]
    fn hitch_detection() {
        let r = DieRoll {
            value: 1,
            die: ResolvedDie::raw(DieFace::D8),
            echo_of: None,
        };
        assert!(r.is_hitch());
    }
}
