//! Pool construction from roll tokens.
//!
//! A token is either a raw die literal (`d4` .. `d12`) or a trait reference.
//! Building stops at the first bad token. The pool-size bound is left to
//! the validator, since doubling can push a legal token count past it.

use crate::dice::{DicePool, DieFace, ResolvedDie};
use crate::error::BuildError;
use crate::resolve::{TraitRef, resolve};
use crate::traits::TraitStore;

/// Build a dice pool from roll tokens.
///
/// Raw dice are never modifiable: `(U)`, `(D)` and `(double)` apply to traits only.
pub fn build_pool<S, T>(store: &S, tokens: &[T]) -> Result<DicePool, BuildError>
where
    S: TraitStore + ?Sized,
    T: AsRef<str>,
{
    let mut pool = DicePool::new();

    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }

        if is_raw_die(token) {
            pool.push(ResolvedDie::raw(parse_raw_die(token)?));
            continue;
        }

        let resolution = resolve(store, &TraitRef::parse(token)?)?;
        if resolution.doubled {
            pool.push_doubled(resolution.to_die());
        } else {
            pool.push(resolution.to_die());
        }
    }

    tracing::debug!(size = pool.count(), "built pool");
    Ok(pool)
}

/// A raw die literal is `d` followed by a digit, with or without a suffix.
fn is_raw_die(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(chars.next(), Some('d' | 'D')) && chars.next().is_some_and(|c| c.is_ascii_digit())
}

fn parse_raw_die(token: &str) -> Result<DieFace, BuildError> {
    if token.contains(['(', ')']) {
        return Err(BuildError::RawDieModifierNotAllowed(token.to_string()));
    }
    DieFace::from_str_tag(token).ok_or_else(|| BuildError::InvalidDieSize(token.to_string()))
}
