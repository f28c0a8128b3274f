//! Interpreting a rolled pool.
//!
//! Any die showing 1 is a hitch and is set aside. The two highest remaining
//! values make the total, and the face of the next-highest remaining die is
//! the effect die. If every die shows 1 the roll is a botch.

pub mod success;

pub use success::{Verdict, evaluate};

use serde::{Deserialize, Serialize};

use crate::dice::{DieFace, DieRoll};

/// Face used for the effect die when no third usable die exists.
pub const DEFAULT_EFFECT: DieFace = DieFace::D4;

/// The interpreted result of a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Sum of the (up to) two highest non-hitch values.
    pub total: u32,
    /// Face of the third-highest non-hitch die, or d4.
    pub effect_face: DieFace,
    /// True when the effect face fell back to d4.
    pub effect_defaulted: bool,
    /// Faces of every die that rolled 1, in pool order.
    pub hitch_faces: Vec<DieFace>,
    /// True when every die rolled 1. Total and effect are meaningless then.
    pub is_botch: bool,
}

impl RollOutcome {
    /// Number of hitches rolled.
    pub fn hitch_count(&self) -> usize {
        self.hitch_faces.len()
    }
}

/// Process rolled dice into a total, effect die, and hitches.
///
/// With fewer than two usable dice the total is whatever is usable: one
/// usable die contributes its value alone, none gives 0.
pub fn process(rolls: &[DieRoll]) -> RollOutcome {
    let hitch_faces: Vec<DieFace> = rolls
        .iter()
        .filter(|r| r.is_hitch())
        .map(|r| r.die.face)
        .collect();
    let is_botch = !rolls.is_empty() && hitch_faces.len() == rolls.len();

    // Stable sort keeps pool order among equal values.
    let mut usable: Vec<(u32, DieFace)> = rolls
        .iter()
        .filter(|r| !r.is_hitch())
        .map(|r| (r.value, r.die.face))
        .collect();
    usable.sort_by(|a, b| b.0.cmp(&a.0));

    let total: u32 = usable.iter().take(2).map(|(value, _)| value).sum();
    let effect = usable.get(2).map(|&(_, face)| face);

    let outcome = RollOutcome {
        total,
        effect_face: effect.unwrap_or(DEFAULT_EFFECT),
        effect_defaulted: effect.is_none(),
        hitch_faces,
        is_botch,
    };
    tracing::debug!(
        total = outcome.total,
        effect = %outcome.effect_face,
        hitches = outcome.hitch_count(),
        botch = outcome.is_botch,
        "processed roll"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ResolvedDie;

    fn make_rolls(values: &[(u32, DieFace)]) -> Vec<DieRoll> {
        values
            .iter()
            .map(|&(value, face)| DieRoll {
                value,
                die: ResolvedDie::raw(face),
                echo_of: None,
            })
            .collect()
    }

    #[test]
    fn two_highest_make_the_total() {
        let rolls = make_rolls(&[(6, DieFace::D8), (4, DieFace::D6), (8, DieFace::D10)]);
        let out = process(&rolls);
        assert_eq!(out.total, 14);
        assert_eq!(out.effect_face, DieFace::D6);
        assert!(!out.effect_defaulted);
        assert!(out.hitch_faces.is_empty());
        assert!(!out.is_botch);
    }

    #[test]
    fn effect_is_face_not_value() {
        let rolls = make_rolls(&[
            (9, DieFace::D12),
            (7, DieFace::D8),
            (5, DieFace::D12),
            (3, DieFace::D4),
        ]);
        let out = process(&rolls);
        assert_eq!(out.total, 16);
        assert_eq!(out.effect_face, DieFace::D12);
    }

    #[test]
    fn hitches_are_excluded() {
        let rolls = make_rolls(&[(1, DieFace::D8), (1, DieFace::D6), (8, DieFace::D8)]);
        let out = process(&rolls);
        assert_eq!(out.total, 8);
        assert_eq!(out.hitch_faces, vec![DieFace::D8, DieFace::D6]);
        assert_eq!(out.hitch_count(), 2);
        assert_eq!(out.effect_face, DieFace::D4);
        assert!(out.effect_defaulted);
        assert!(!out.is_botch);
    }

    #[test]
    fn two_dice_default_the_effect() {
        let rolls = make_rolls(&[(6, DieFace::D8), (8, DieFace::D8)]);
        let out = process(&rolls);
        assert_eq!(out.total, 14);
        assert!(out.hitch_faces.is_empty());
        assert_eq!(out.effect_face, DieFace::D4);
        assert!(out.effect_defaulted);
    }

    #[test]
    fn all_ones_is_a_botch() {
        for size in 1..=10 {
            let rolls = make_rolls(&vec![(1, DieFace::D12); size]);
            let out = process(&rolls);
            assert!(out.is_botch, "size {size} should botch");
            assert_eq!(out.total, 0);
            assert_eq!(out.hitch_count(), size);
        }
    }

    #[test]
    fn single_die_roll() {
        let out = process(&make_rolls(&[(5, DieFace::D6)]));
        assert_eq!(out.total, 5);
        assert!(out.effect_defaulted);
        assert!(!out.is_botch);
    }

    #[test]
    fn empty_rolls_are_not_a_botch() {
        let out = process(&[]);
        assert!(!out.is_botch);
        assert_eq!(out.total, 0);
    }

    #[test]
    fn total_never_includes_ones() {
        let rolls = make_rolls(&[(1, DieFace::D4), (2, DieFace::D4), (1, DieFace::D4)]);
        let out = process(&rolls);
        assert_eq!(out.total, 2);
    }
}
