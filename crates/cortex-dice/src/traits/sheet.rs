//! In-memory trait stores loaded from a character sheet.
//!
//! A sheet is JSON with one object per category. Each trait is either a bare
//! die size or an object with a die, display name, and description:
//!
//! ```json
//! {
//!   "name": "Kael",
//!   "attributes": { "strength": 8 },
//!   "distinctions": { "warrior": { "die": 8, "name": "Sworn Warrior" } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{TraitCategory, TraitEntry, TraitStore};
use crate::dice::DieFace;
use crate::error::SheetError;

/// Traits of a single category, keyed by lowercase name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraitSet {
    entries: BTreeMap<String, TraitEntry>,
}

impl TraitSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a trait. Returns the previous entry under the same key.
    pub fn insert(&mut self, key: &str, entry: TraitEntry) -> Option<TraitEntry> {
        self.entries.insert(normalize(key), entry)
    }

    /// Find a trait by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&TraitEntry> {
        self.entries.get(&normalize(name))
    }

    /// All keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate keys and entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TraitEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of traits in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set has no traits.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A character's five trait categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CharacterTraits {
    /// Character name.
    pub name: String,
    attributes: TraitSet,
    skills: TraitSet,
    distinctions: TraitSet,
    resources: TraitSet,
    signature_assets: TraitSet,
}

impl CharacterTraits {
    /// Create a character with no traits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load a character from a JSON sheet.
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        let raw: RawSheet = serde_json::from_str(json)?;
        let mut character = Self::new(raw.name);

        let categories = [
            (TraitCategory::Attribute, raw.attributes),
            (TraitCategory::Skill, raw.skills),
            (TraitCategory::Distinction, raw.distinctions),
            (TraitCategory::Resource, raw.resources),
            (TraitCategory::SignatureAsset, raw.signature_assets),
        ];

        for (category, traits) in categories {
            for (key, raw_trait) in traits {
                let entry = raw_trait.into_entry(&key);
                if character.set_mut(category).insert(&key, entry).is_some() {
                    return Err(SheetError::DuplicateTrait {
                        category,
                        name: normalize(&key),
                    });
                }
            }
        }

        Ok(character)
    }

    /// Add a trait named after its key, builder style.
    pub fn with_trait(mut self, category: TraitCategory, key: &str, die: DieFace) -> Self {
        self.set_mut(category)
            .insert(key, TraitEntry::new(die, key.to_string()));
        self
    }

    /// Add a fully specified trait, builder style.
    pub fn with_entry(mut self, category: TraitCategory, key: &str, entry: TraitEntry) -> Self {
        self.set_mut(category).insert(key, entry);
        self
    }

    /// The traits of one category.
    pub fn set(&self, category: TraitCategory) -> &TraitSet {
        match category {
            TraitCategory::Attribute => &self.attributes,
            TraitCategory::Skill => &self.skills,
            TraitCategory::Distinction => &self.distinctions,
            TraitCategory::Resource => &self.resources,
            TraitCategory::SignatureAsset => &self.signature_assets,
        }
    }

    /// Mutable access to the traits of one category.
    pub fn set_mut(&mut self, category: TraitCategory) -> &mut TraitSet {
        match category {
            TraitCategory::Attribute => &mut self.attributes,
            TraitCategory::Skill => &mut self.skills,
            TraitCategory::Distinction => &mut self.distinctions,
            TraitCategory::Resource => &mut self.resources,
            TraitCategory::SignatureAsset => &mut self.signature_assets,
        }
    }
}

impl TraitStore for CharacterTraits {
    fn get(&self, category: TraitCategory, name: &str) -> Option<&TraitEntry> {
        self.set(category).get(name)
    }

    fn all(&self, category: TraitCategory) -> Vec<&str> {
        self.set(category).keys().collect()
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

#[derive(Deserialize)]
struct RawSheet {
    #[serde(default)]
    name: String,
    #[serde(default)]
    attributes: BTreeMap<String, RawTrait>,
    #[serde(default)]
    skills: BTreeMap<String, RawTrait>,
    #[serde(default)]
    distinctions: BTreeMap<String, RawTrait>,
    #[serde(default)]
    resources: BTreeMap<String, RawTrait>,
    #[serde(default)]
    signature_assets: BTreeMap<String, RawTrait>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTrait {
    Die(DieFace),
    Full {
        die: DieFace,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl RawTrait {
    fn into_entry(self, key: &str) -> TraitEntry {
        match self {
            Self::Die(die) => TraitEntry::new(die, key.trim()),
            Self::Full {
                die,
                name,
                description,
            } => TraitEntry {
                die,
                name: name.unwrap_or_else(|| key.trim().to_string()),
                description,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"{
        "name": "Kael Stormborn",
        "attributes": { "Strength": 8, "agility": 6 },
        "skills": { "fighting": 8 },
        "distinctions": {
            "warrior": { "die": 8, "name": "Sworn Warrior", "description": "Knight of Dawn" }
        },
        "signature_assets": { "sword": 6 }
    }"#;

    #[test]
    fn load_sheet() {
        let c = CharacterTraits::from_json(SHEET).unwrap();
        assert_eq!(c.name, "Kael Stormborn");
        assert_eq!(c.set(TraitCategory::Attribute).len(), 2);
        assert!(c.set(TraitCategory::Resource).is_empty());

        let strength = c.get(TraitCategory::Attribute, "STRENGTH").unwrap();
        assert_eq!(strength.die, DieFace::D8);
        assert_eq!(strength.name, "Strength");

        let warrior = c.get(TraitCategory::Distinction, "warrior").unwrap();
        assert_eq!(warrior.name, "Sworn Warrior");
        assert_eq!(warrior.description.as_deref(), Some("Knight of Dawn"));
    }

    #[test]
    fn all_lists_sorted_keys() {
        let c = CharacterTraits::from_json(SHEET).unwrap();
        assert_eq!(c.all(TraitCategory::Attribute), vec!["agility", "strength"]);
        assert!(c.all(TraitCategory::Resource).is_empty());
    }

    #[test]
    fn rejects_off_ladder_die() {
        let err = CharacterTraits::from_json(r#"{ "attributes": { "strength": 7 } }"#);
        assert!(matches!(err, Err(SheetError::Parse(_))));
    }

    #[test]
    fn rejects_case_duplicates() {
        let err =
            CharacterTraits::from_json(r#"{ "skills": { "Fighting": 8, "fighting": 6 } }"#);
        match err {
            Err(SheetError::DuplicateTrait { category, name }) => {
                assert_eq!(category, TraitCategory::Skill);
                assert_eq!(name, "fighting");
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn same_name_in_two_categories_is_allowed() {
        let c = CharacterTraits::from_json(
            r#"{ "attributes": { "will": 6 }, "resources": { "will": 10 } }"#,
        )
        .unwrap();
        assert_eq!(c.get(TraitCategory::Attribute, "will").unwrap().die, DieFace::D6);
        assert_eq!(c.get(TraitCategory::Resource, "will").unwrap().die, DieFace::D10);
    }

    #[test]
    fn builder() {
        let c = CharacterTraits::new("Test")
            .with_trait(TraitCategory::Skill, "Stealth", DieFace::D6)
            .with_entry(
                TraitCategory::Resource,
                "allies",
                TraitEntry::new(DieFace::D4, "Old Allies").with_description("friends"),
            );
        assert_eq!(c.get(TraitCategory::Skill, "stealth").unwrap().name, "Stealth");
        assert_eq!(c.get(TraitCategory::Resource, "ALLIES").unwrap().die, DieFace::D4);
    }
}
