//! Success tiers against a difficulty.

use serde::{Deserialize, Serialize};

use super::RollOutcome;

/// How far past the difficulty a total must reach to be heroic.
pub const HEROIC_MARGIN: u32 = 5;

/// Compare a total to a difficulty.
///
/// Returns `(success, heroic)`. With no difficulty every roll succeeds and
/// none is heroic.
pub fn evaluate(total: u32, difficulty: Option<u32>) -> (bool, bool) {
    evaluate_with_margin(total, difficulty, HEROIC_MARGIN)
}

/// [`evaluate`] with a custom heroic margin.
pub fn evaluate_with_margin(total: u32, difficulty: Option<u32>, margin: u32) -> (bool, bool) {
    match difficulty {
        None => (true, false),
        Some(difficulty) => (
            total >= difficulty,
            total >= difficulty.saturating_add(margin),
        ),
    }
}

/// The overall verdict on a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every die rolled 1.
    Botch,
    /// No difficulty was set.
    Unopposed,
    /// The total fell short of the difficulty.
    Failure,
    /// The total met the difficulty.
    Success,
    /// The total beat the difficulty by the heroic margin or more.
    Heroic,
}

impl Verdict {
    /// Derive the verdict for a processed roll.
    pub fn from_outcome(outcome: &RollOutcome, difficulty: Option<u32>, margin: u32) -> Self {
        if outcome.is_botch {
            return Self::Botch;
        }
        match evaluate_with_margin(outcome.total, difficulty, margin) {
            _ if difficulty.is_none() => Self::Unopposed,
            (true, true) => Self::Heroic,
            (true, false) => Self::Success,
            (false, _) => Self::Failure,
        }
    }

    /// Returns true for Success, Heroic, and Unopposed.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::Heroic | Self::Unopposed)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Botch => write!(f, "Botch"),
            Self::Unopposed => write!(f, "Unopposed"),
            Self::Failure => write!(f, "Failure"),
            Self::Success => write!(f, "Success"),
            Self::Heroic => write!(f, "Heroic Success"),
        }
    }
}
