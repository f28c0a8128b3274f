//! Configuration for resolving rolls.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::validate::MAX_POOL_SIZE;

/// Table-level settings for a roll.
#[derive(Debug, Clone)]
pub struct RollConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Largest pool allowed (1 to 10).
    pub max_pool_size: usize,
    /// Whether to flag several traits drawn from one category.
    pub category_notices: bool,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_pool_size: MAX_POOL_SIZE,
            category_notices: true,
        }
    }
}

impl RollConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pool bound (clamped to 1-10).
    pub fn with_max_pool_size(mut self, max: usize) -> Self {
        self.max_pool_size = max.clamp(1, MAX_POOL_SIZE);
        self
    }

    /// Enable or disable category notices.
    pub fn with_category_notices(mut self, enabled: bool) -> Self {
        self.category_notices = enabled;
        self
    }

    /// Build the RNG this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{DieFace, RandomSource};

    #[test]
    fn default_config() {
        let cfg = RollConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.max_pool_size, 10);
        assert!(cfg.category_notices);
    }

    #[test]
    fn builder_methods() {
        let cfg = RollConfig::default()
            .with_seed(7)
            .with_max_pool_size(6)
            .with_category_notices(false);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.max_pool_size, 6);
        assert!(!cfg.category_notices);
    }

    #[test]
    fn pool_size_clamped() {
        assert_eq!(RollConfig::default().with_max_pool_size(0).max_pool_size, 1);
        assert_eq!(RollConfig::default().with_max_pool_size(99).max_pool_size, 10);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = RollConfig::default().with_seed(42);
        let mut a = cfg.rng();
        let mut b = cfg.rng();
        for _ in 0..20 {
            assert_eq!(a.roll_face(DieFace::D12), b.roll_face(DieFace::D12));
        }
    }
}
