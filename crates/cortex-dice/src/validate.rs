//! Pool composition rules, checked before anything is rolled.
//!
//! A pool holds 1 to [`MAX_POOL_SIZE`] dice. Once any trait-backed die is in
//! the pool, an Attribute, a Skill, and a Distinction must all be present.
//! Raw dice and the echoes of doubled traits never trigger or satisfy that
//! rule.

use crate::dice::DicePool;
use crate::error::ValidationError;
use crate::traits::TraitCategory;

/// Largest pool a single roll may use.
pub const MAX_POOL_SIZE: usize = 10;

/// Validate a pool against the standard bound.
pub fn validate(pool: &DicePool) -> Result<(), ValidationError> {
    validate_with_limit(pool, MAX_POOL_SIZE)
}

/// Validate a pool against a tighter bound (never above [`MAX_POOL_SIZE`]).
pub fn validate_with_limit(pool: &DicePool, max: usize) -> Result<(), ValidationError> {
    let max = max.clamp(1, MAX_POOL_SIZE);

    if pool.is_empty() {
        return Err(ValidationError::EmptyPool);
    }
    if pool.count() > max {
        return Err(ValidationError::PoolTooLarge {
            size: pool.count(),
            max,
        });
    }

    let present: Vec<TraitCategory> = pool.dice().iter().filter_map(|d| d.category).collect();
    if present.is_empty() {
        return Ok(());
    }

    let missing: Vec<TraitCategory> = TraitCategory::PRIME
        .into_iter()
        .filter(|prime| !present.contains(prime))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        tracing::debug!(?missing, "pool is missing prime sets");
        Err(ValidationError::MissingPrimeSets(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{DieFace, ResolvedDie};
    use proptest::prelude::*;

    fn trait_die(category: TraitCategory, name: &str) -> ResolvedDie {
        ResolvedDie::from_trait(DieFace::D8, category, name, None)
    }

    fn prime_pool() -> DicePool {
        DicePool::new()
            .add_trait(trait_die(TraitCategory::Attribute, "strength"))
            .add_trait(trait_die(TraitCategory::Skill, "fighting"))
            .add_trait(trait_die(TraitCategory::Distinction, "warrior"))
    }

    #[test]
    fn empty_pool_rejected() {
        assert_eq!(validate(&DicePool::new()), Err(ValidationError::EmptyPool));
    }

    #[test]
    fn oversized_pool_rejected() {
        let pool = (0..11).fold(DicePool::new(), |p, _| p.add_die(DieFace::D6));
        assert_eq!(
            validate(&pool),
            Err(ValidationError::PoolTooLarge { size: 11, max: 10 })
        );
    }

    #[test]
    fn ten_dice_allowed() {
        let pool = (0..10).fold(DicePool::new(), |p, _| p.add_die(DieFace::D6));
        assert_eq!(validate(&pool), Ok(()));
    }

    #[test]
    fn tighter_limit() {
        let pool = DicePool::new().add_die(DieFace::D4).add_die(DieFace::D4).add_die(DieFace::D4);
        assert_eq!(
            validate_with_limit(&pool, 2),
            Err(ValidationError::PoolTooLarge { size: 3, max: 2 })
        );
        assert_eq!(validate_with_limit(&pool, 50), Ok(()));
    }

    #[test]
    fn complete_prime_set_passes() {
        assert_eq!(validate(&prime_pool()), Ok(()));
    }

    #[test]
    fn prime_set_with_asset_and_raw_dice_passes() {
        let pool = prime_pool()
            .add_trait(trait_die(TraitCategory::SignatureAsset, "sword"))
            .add_trait(trait_die(TraitCategory::Resource, "allies"))
            .add_die(DieFace::D6);
        assert_eq!(validate(&pool), Ok(()));
    }

    #[test]
    fn single_attribute_reports_two_missing() {
        let pool = DicePool::new().add_trait(trait_die(TraitCategory::Attribute, "strength"));
        assert_eq!(
            validate(&pool),
            Err(ValidationError::MissingPrimeSets(vec![
                TraitCategory::Skill,
                TraitCategory::Distinction,
            ]))
        );
    }

    #[test]
    fn missing_skill_only() {
        let pool = DicePool::new()
            .add_trait(trait_die(TraitCategory::Attribute, "strength"))
            .add_trait(trait_die(TraitCategory::Distinction, "warrior"))
            .add_trait(trait_die(TraitCategory::SignatureAsset, "sword"));
        assert_eq!(
            validate(&pool),
            Err(ValidationError::MissingPrimeSets(vec![TraitCategory::Skill]))
        );
    }

    #[test]
    fn asset_alone_requires_all_three() {
        let pool = DicePool::new().add_trait(trait_die(TraitCategory::SignatureAsset, "sword"));
        assert_eq!(
            validate(&pool),
            Err(ValidationError::MissingPrimeSets(TraitCategory::PRIME.to_vec()))
        );
    }

    #[test]
    fn echo_does_not_satisfy_prime_sets() {
        let pool = DicePool::new()
            .add_doubled(trait_die(TraitCategory::Attribute, "strength"))
            .add_trait(trait_die(TraitCategory::Skill, "fighting"));
        assert_eq!(
            validate(&pool),
            Err(ValidationError::MissingPrimeSets(vec![
                TraitCategory::Distinction
            ]))
        );
    }

    fn any_face() -> impl Strategy<Value = DieFace> {
        prop::sample::select(DieFace::LADDER.to_vec())
    }

    proptest! {
        #[test]
        fn raw_pools_always_validate(faces in prop::collection::vec(any_face(), 1..=10)) {
            let pool = faces.into_iter().fold(DicePool::new(), DicePool::add_die);
            prop_assert_eq!(validate(&pool), Ok(()));
        }

        #[test]
        fn support_dice_need_prime_sets(
            asset in prop::bool::ANY,
            extra_raw in 0usize..5,
        ) {
            let category = if asset {
                TraitCategory::SignatureAsset
            } else {
                TraitCategory::Resource
            };
            let pool = (0..extra_raw)
                .fold(DicePool::new(), |p, _| p.add_die(DieFace::D6))
                .add_trait(trait_die(category, "support"));
            prop_assert!(validate(&pool).is_err());
            let full = prime_pool().add_trait(trait_die(category, "support"));
            prop_assert_eq!(validate(&full), Ok(()));
        }
    }
}
