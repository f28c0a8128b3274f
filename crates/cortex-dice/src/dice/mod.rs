//! Die faces, pools, and rolling.
//!
//! Cortex Prime only uses the five faces of the step ladder
//! d4 → d6 → d8 → d10 → d12. Stepping a die moves it along that ladder and
//! clamps at both ends, so no other face can ever be constructed.

pub mod pool;
pub mod roll;

pub use pool::{DicePool, ResolvedDie};
pub use roll::{DieRoll, FixedRolls, RandomSource, roll};

use serde::{Deserialize, Serialize};

/// A legal die face on the step ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DieFace {
    /// Four-sided die, the bottom of the ladder.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die, the top of the ladder.
    D12,
}

impl DieFace {
    /// The ladder in ascending order.
    pub const LADDER: [Self; 5] = [Self::D4, Self::D6, Self::D8, Self::D10, Self::D12];

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }

    /// Look up the face with the given number of sides.
    pub fn from_sides(sides: u32) -> Option<Self> {
        match sides {
            4 => Some(Self::D4),
            6 => Some(Self::D6),
            8 => Some(Self::D8),
            10 => Some(Self::D10),
            12 => Some(Self::D12),
            _ => None,
        }
    }

    /// Parse a face from a string like "d8" or "D12".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.strip_prefix('d')? {
            "4" => Some(Self::D4),
            "6" => Some(Self::D6),
            "8" => Some(Self::D8),
            "10" => Some(Self::D10),
            "12" => Some(Self::D12),
            _ => None,
        }
    }

    /// Move `delta` positions along the ladder, clamping at d4 and d12.
    pub fn step(self, delta: i32) -> Self {
        let index = self.index() as i64 + i64::from(delta);
        let clamped = index.clamp(0, Self::LADDER.len() as i64 - 1);
        Self::LADDER[clamped as usize]
    }

    /// One step up the ladder.
    pub fn step_up(self) -> Self {
        self.step(1)
    }

    /// One step down the ladder.
    pub fn step_down(self) -> Self {
        self.step(-1)
    }

    fn index(self) -> usize {
        match self {
            Self::D4 => 0,
            Self::D6 => 1,
            Self::D8 => 2,
            Self::D10 => 3,
            Self::D12 => 4,
        }
    }
}

impl TryFrom<u32> for DieFace {
    type Error = String;

    fn try_from(sides: u32) -> Result<Self, Self::Error> {
        Self::from_sides(sides)
            .ok_or_else(|| format!("d{sides} is not a legal die (use 4, 6, 8, 10 or 12)"))
    }
}

impl From<DieFace> for u32 {
    fn from(face: DieFace) -> Self {
        face.sides()
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
