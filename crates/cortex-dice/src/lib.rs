//! Cortex Prime dice-pool resolution engine.
//!
//! Turns a character's traits and raw dice into a validated pool, rolls it,
//! and derives a total, an effect die, hitches, and a verdict against an
//! optional difficulty. Every stage is a pure function of its input;
//! randomness comes from an injected [`RandomSource`].
//!
//! The pipeline runs Build → Validate → Roll → Process → Evaluate, and
//! [`roll_check`] wires all of it together for a textual [`RollRequest`].

pub mod build;
pub mod check;
pub mod config;
pub mod dice;
pub mod difficulty;
pub mod error;
pub mod request;
pub mod resolution;
pub mod resolve;
pub mod traits;
pub mod validate;

pub use build::build_pool;
pub use check::{Notice, RollReport, RolledDie, roll_check};
pub use config::RollConfig;
pub use dice::{DicePool, DieFace, DieRoll, FixedRolls, RandomSource, ResolvedDie, roll};
pub use difficulty::{DIFFICULTIES, difficulty_name, parse_difficulty};
pub use error::{
    BuildError, CortexError, CortexResult, DifficultyError, LookupError, RequestError, SheetError,
    ValidationError,
};
pub use request::RollRequest;
pub use resolution::{RollOutcome, Verdict, evaluate, process};
pub use resolve::{Modifier, Resolution, StepModifier, TraitRef, resolve, resolve_token};
pub use traits::{CharacterTraits, TraitCategory, TraitEntry, TraitSet, TraitStore};
pub use validate::{MAX_POOL_SIZE, validate, validate_with_limit};
