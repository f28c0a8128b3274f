//! Trait categories and the read-only trait store a roll resolves against.
//!
//! A character's traits live in five independent categories. Lookup walks
//! them in [`TraitCategory::PRIORITY`] order and stops at the first match.

pub mod sheet;

pub use sheet::{CharacterTraits, TraitSet};

use serde::{Deserialize, Serialize};

use crate::dice::DieFace;

/// The category a trait belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    /// Innate capability, e.g. Strength.
    Attribute,
    /// Trained capability, e.g. Fighting.
    Skill,
    /// Defining descriptor, e.g. Warrior.
    Distinction,
    /// Expendable backing, e.g. Allies.
    Resource,
    /// Signature gear or companion.
    SignatureAsset,
}

impl TraitCategory {
    /// Lookup order: earlier categories shadow later ones.
    pub const PRIORITY: [Self; 5] = [
        Self::Attribute,
        Self::Skill,
        Self::Distinction,
        Self::Resource,
        Self::SignatureAsset,
    ];

    /// The three categories every trait-backed roll must include.
    pub const PRIME: [Self; 3] = [Self::Attribute, Self::Skill, Self::Distinction];

    /// Returns true for Attribute, Skill, and Distinction.
    pub fn is_prime(self) -> bool {
        Self::PRIME.contains(&self)
    }

    /// The key used for this category in character sheets.
    pub fn key(self) -> &'static str {
        match self {
            Self::Attribute => "attributes",
            Self::Skill => "skills",
            Self::Distinction => "distinctions",
            Self::Resource => "resources",
            Self::SignatureAsset => "signature_assets",
        }
    }
}

impl std::fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attribute => write!(f, "Attribute"),
            Self::Skill => write!(f, "Skill"),
            Self::Distinction => write!(f, "Distinction"),
            Self::Resource => write!(f, "Resource"),
            Self::SignatureAsset => write!(f, "Signature Asset"),
        }
    }
}

/// A stored trait value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitEntry {
    /// The trait's current die.
    pub die: DieFace,
    /// Name shown to players.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TraitEntry {
    /// Create an entry with no description.
    pub fn new(die: DieFace, name: impl Into<String>) -> Self {
        Self {
            die,
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Read access to a character's traits.
///
/// The engine never writes through this interface. Callers must not mutate
/// the underlying traits while a roll is being resolved.
pub trait TraitStore {
    /// Find a trait by name (case-insensitive) within one category.
    fn get(&self, category: TraitCategory, name: &str) -> Option<&TraitEntry>;

    /// All trait keys known in one category.
    fn all(&self, category: TraitCategory) -> Vec<&str>;
}
