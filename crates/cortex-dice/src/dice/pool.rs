//! Dice pool construction.

use serde::{Deserialize, Serialize};

use super::DieFace;
use crate::resolve::StepModifier;
use crate::traits::TraitCategory;

/// One die in a pool, with the trait it came from (if any).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDie {
    /// The face to roll.
    pub face: DieFace,
    /// The trait category backing this die, or `None` for a raw die.
    pub category: Option<TraitCategory>,
    /// The trait key backing this die, or `None` for a raw die.
    pub trait_name: Option<String>,
    /// The step applied to the trait's stored die, if any.
    pub step: Option<StepModifier>,
}

impl ResolvedDie {
    /// A raw die with no trait backing.
    pub fn raw(face: DieFace) -> Self {
        Self {
            face,
            category: None,
            trait_name: None,
            step: None,
        }
    }

    /// A die backed by a trait.
    pub fn from_trait(
        face: DieFace,
        category: TraitCategory,
        trait_name: impl Into<String>,
        step: Option<StepModifier>,
    ) -> Self {
        Self {
            face,
            category: Some(category),
            trait_name: Some(trait_name.into()),
            step,
        }
    }

    /// Returns true if this die has no trait backing.
    pub fn is_raw(&self) -> bool {
        self.category.is_none()
    }
}

/// An ordered collection of dice to be rolled together.
///
/// A doubled trait contributes two entries: the trait die and an identity-less
/// echo of the same face right after it. `doubled_from` records, per entry,
/// which pool index an echo belongs to, so consumers never have to infer it
/// from adjacency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DicePool {
    dice: Vec<ResolvedDie>,
    doubled_from: Vec<Option<usize>>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a die.
    pub fn push(&mut self, die: ResolvedDie) {
        self.dice.push(die);
        self.doubled_from.push(None);
    }

    /// Append a trait die followed by its echo.
    pub fn push_doubled(&mut self, die: ResolvedDie) {
        let origin = self.dice.len();
        let echo = ResolvedDie::raw(die.face);
        self.push(die);
        self.dice.push(echo);
        self.doubled_from.push(Some(origin));
    }

    /// Add a raw die, builder style.
    pub fn add_die(mut self, face: DieFace) -> Self {
        self.push(ResolvedDie::raw(face));
        self
    }

    /// Add a trait die, builder style.
    pub fn add_trait(mut self, die: ResolvedDie) -> Self {
        self.push(die);
        self
    }

    /// Add a doubled trait die, builder style.
    pub fn add_doubled(mut self, die: ResolvedDie) -> Self {
        self.push_doubled(die);
        self
    }

    /// The dice in pool order.
    pub fn dice(&self) -> &[ResolvedDie] {
        &self.dice
    }

    /// For an echo entry, the index of the trait die it doubles.
    pub fn doubled_from(&self, index: usize) -> Option<usize> {
        self.doubled_from.get(index).copied().flatten()
    }

    /// Iterate dice together with their echo origin.
    pub fn iter(&self) -> impl Iterator<Item = (&ResolvedDie, Option<usize>)> {
        self.dice.iter().zip(self.doubled_from.iter().copied())
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}
