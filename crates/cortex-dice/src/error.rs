//! Error types for the dice engine.
//!
//! Each pipeline stage has its own error family so callers can match on the
//! stage that refused the roll. [`CortexError`] wraps all of them.

use thiserror::Error;

use crate::traits::TraitCategory;

/// A trait reference could not be resolved against the character's stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The base name was not found in any trait category.
    #[error("unknown trait or invalid die: {0}")]
    UnknownTrait(String),
}

/// A roll token could not be turned into dice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Trait lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The modifier suffix is unparseable, unknown, or repeated.
    #[error("malformed modifier in '{0}' (use (U), (D) or (double))")]
    MalformedModifier(String),

    /// A raw die literal carried a step or double modifier.
    #[error("raw dice like '{0}' cannot be stepped or doubled, only traits can be modified")]
    RawDieModifierNotAllowed(String),

    /// A raw die literal named a face outside the d4..d12 ladder.
    #[error("invalid die size: {0}")]
    InvalidDieSize(String),

    /// A trait name contains characters no trait can have.
    #[error("invalid character in trait name: {0}")]
    InvalidTraitName(String),
}

/// A built pool breaks a composition rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The pool has no dice.
    #[error("you must specify at least one die to roll")]
    EmptyPool,

    /// The pool has more dice than allowed.
    #[error("you cannot roll more than {max} dice at once (pool has {size})")]
    PoolTooLarge {
        /// Number of dice in the rejected pool.
        size: usize,
        /// Largest pool allowed.
        max: usize,
    },

    /// Traits were used without all three prime sets present.
    #[error("when using traits, you must include {}", describe_missing(.0))]
    MissingPrimeSets(Vec<TraitCategory>),
}

/// A difficulty clause could not be turned into a target number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifficultyError {
    /// A numeric difficulty outside 1..=30.
    #[error("difficulty must be between 1 and 30, not {0}")]
    OutOfRange(i64),

    /// A name that matches no difficulty.
    #[error("unknown difficulty '{0}' (valid difficulties are: very easy, easy, challenging, hard, very hard)")]
    Unknown(String),

    /// A name prefix shared by several difficulties.
    #[error("ambiguous difficulty '{input}', matches: {}", .candidates.join(", "))]
    Ambiguous {
        /// What the player typed.
        input: String,
        /// Every difficulty name the input is a prefix of.
        candidates: Vec<String>,
    },
}

/// The textual roll request is structurally unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// No dice or traits were named.
    #[error("what dice do you want to roll?")]
    NoDice,

    /// `vs` was given with nothing after it.
    #[error("'vs' must be followed by a number or a difficulty name")]
    MissingDifficulty,

    /// A double quote was opened but never closed.
    #[error("unterminated quote in roll request")]
    UnterminatedQuote,
}

/// A character sheet could not be loaded.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The sheet is not valid JSON or has the wrong shape.
    #[error("invalid character sheet: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two traits in the same category differ only by case.
    #[error("duplicate {category} trait: {name}")]
    DuplicateTrait {
        /// Category holding the duplicate.
        category: TraitCategory,
        /// Normalized trait key.
        name: String,
    },
}

/// Any error the engine can produce.
#[derive(Debug, Error)]
pub enum CortexError {
    /// Request parsing failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Difficulty parsing failed.
    #[error(transparent)]
    Difficulty(#[from] DifficultyError),

    /// Pool construction failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Pool validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Sheet loading failed.
    #[error(transparent)]
    Sheet(#[from] SheetError),
}

impl From<LookupError> for CortexError {
    fn from(e: LookupError) -> Self {
        Self::Build(BuildError::Lookup(e))
    }
}

/// Convenience result type for engine operations.
pub type CortexResult<T> = Result<T, CortexError>;

/// Joins missing prime sets into "a Skill", "a Skill and a Distinction", or
/// "an Attribute, a Skill and a Distinction".
fn describe_missing(missing: &[TraitCategory]) -> String {
    let parts: Vec<String> = missing
        .iter()
        .map(|c| {
            let name = c.to_string();
            let article = if name.starts_with(['A', 'E', 'I', 'O', 'U']) {
                "an"
            } else {
                "a"
            };
            format!("{article} {name}")
        })
        .collect();

    match parts.as_slice() {
        [] => "all prime sets".to_string(),
        [one] => one.clone(),
        [rest @ .., last] => format!("{} and {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_one_prime_set() {
        let e = ValidationError::MissingPrimeSets(vec![TraitCategory::Skill]);
        assert_eq!(e.to_string(), "when using traits, you must include a Skill");
    }

    #[test]
    fn missing_two_prime_sets() {
        let e = ValidationError::MissingPrimeSets(vec![
            TraitCategory::Skill,
            TraitCategory::Distinction,
        ]);
        assert_eq!(
            e.to_string(),
            "when using traits, you must include a Skill and a Distinction"
        );
    }

    #[test]
    fn missing_all_prime_sets() {
        let e = ValidationError::MissingPrimeSets(vec![
            TraitCategory::Attribute,
            TraitCategory::Skill,
            TraitCategory::Distinction,
        ]);
        assert_eq!(
            e.to_string(),
            "when using traits, you must include an Attribute, a Skill and a Distinction"
        );
    }

    #[test]
    fn ambiguous_lists_candidates() {
        let e = DifficultyError::Ambiguous {
            input: "very".to_string(),
            candidates: vec!["very easy".to_string(), "very hard".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "ambiguous difficulty 'very', matches: very easy, very hard"
        );
    }

    #[test]
    fn lookup_error_lifts_into_build_error() {
        let e: CortexError = LookupError::UnknownTrait("flying".to_string()).into();
        assert!(matches!(
            e,
            CortexError::Build(BuildError::Lookup(LookupError::UnknownTrait(_)))
        ));
        assert_eq!(e.to_string(), "unknown trait or invalid die: flying");
    }
}
