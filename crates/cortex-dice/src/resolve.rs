//! Trait references and their resolution to dice.
//!
//! A trait token is a base name with at most one parenthesized modifier:
//! `strength`, `strength(U)`, `strength(D)`, or `strength(double)`. The
//! modifier is parsed before any lookup, so a malformed token never touches
//! the trait store.

use serde::{Deserialize, Serialize};

use crate::dice::{DieFace, ResolvedDie};
use crate::error::{BuildError, LookupError};
use crate::traits::{TraitCategory, TraitStore};

/// A one-step change to a trait's die for a single roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepModifier {
    /// Step the die up one size.
    Up,
    /// Step the die down one size.
    Down,
}

impl StepModifier {
    /// Ladder delta this modifier applies.
    pub fn delta(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl std::fmt::Display for StepModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "U"),
            Self::Down => write!(f, "D"),
        }
    }
}

/// The modifier suffix on a trait token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// `(U)` or `(D)`.
    Step(StepModifier),
    /// `(double)`: roll the trait die twice.
    Double,
}

impl Modifier {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "u" => Some(Self::Step(StepModifier::Up)),
            "d" => Some(Self::Step(StepModifier::Down)),
            "double" => Some(Self::Double),
            _ => None,
        }
    }
}

/// A parsed trait token: base name plus optional modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitRef {
    /// The base name as typed, trimmed.
    pub name: String,
    /// The modifier suffix, if any.
    pub modifier: Option<Modifier>,
}

impl TraitRef {
    /// Split a token into base name and modifier.
    pub fn parse(token: &str) -> Result<Self, BuildError> {
        let token = token.trim();
        let malformed = || BuildError::MalformedModifier(token.to_string());

        let (name, modifier) = match token.split_once('(') {
            Some((base, rest)) => {
                let inner = rest.strip_suffix(')').ok_or_else(malformed)?;
                if inner.contains(['(', ')']) {
                    return Err(malformed());
                }
                (base.trim(), Some(Modifier::parse(inner).ok_or_else(malformed)?))
            }
            None if token.contains(')') => return Err(malformed()),
            None => (token, None),
        };

        if name.is_empty() {
            return Err(malformed());
        }
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-' | '\''))
        {
            return Err(BuildError::InvalidTraitName(name.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            modifier,
        })
    }

    /// The step modifier, if the suffix was `(U)` or `(D)`.
    pub fn step(&self) -> Option<StepModifier> {
        match self.modifier {
            Some(Modifier::Step(step)) => Some(step),
            _ => None,
        }
    }

    /// Returns true if the suffix was `(double)`.
    pub fn is_doubled(&self) -> bool {
        self.modifier == Some(Modifier::Double)
    }
}

/// A trait reference resolved against a character's stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The die to roll, after any step.
    pub face: DieFace,
    /// The category the trait was found in.
    pub category: TraitCategory,
    /// The trait key, lowercased.
    pub trait_name: String,
    /// The step applied, if any.
    pub step: Option<StepModifier>,
    /// Whether an echo die should follow.
    pub doubled: bool,
}

impl Resolution {
    /// The pool entry for the trait itself.
    pub fn to_die(&self) -> ResolvedDie {
        ResolvedDie::from_trait(self.face, self.category, self.trait_name.clone(), self.step)
    }
}

/// Resolve a parsed trait reference.
///
/// Categories are searched in [`TraitCategory::PRIORITY`] order and the first
/// match wins. The stored die is read, never written; a step is applied to
/// the copy used for this roll.
pub fn resolve<S: TraitStore + ?Sized>(
    store: &S,
    trait_ref: &TraitRef,
) -> Result<Resolution, LookupError> {
    let (category, entry) = TraitCategory::PRIORITY
        .iter()
        .find_map(|&category| store.get(category, &trait_ref.name).map(|e| (category, e)))
        .ok_or_else(|| LookupError::UnknownTrait(trait_ref.name.clone()))?;

    let step = trait_ref.step();
    let face = entry.die.step(step.map_or(0, StepModifier::delta));

    let resolution = Resolution {
        face,
        category,
        trait_name: trait_ref.name.to_lowercase(),
        step,
        doubled: trait_ref.is_doubled(),
    };
    tracing::debug!(
        trait_name = %resolution.trait_name,
        %category,
        stored = %entry.die,
        %face,
        doubled = resolution.doubled,
        "resolved trait"
    );
    Ok(resolution)
}

/// Parse and resolve a trait token in one go.
pub fn resolve_token<S: TraitStore + ?Sized>(
    store: &S,
    token: &str,
) -> Result<Resolution, BuildError> {
    let trait_ref = TraitRef::parse(token)?;
    Ok(resolve(store, &trait_ref)?)
}
