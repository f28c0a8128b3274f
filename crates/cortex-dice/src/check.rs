//! The full roll pipeline: build, validate, roll, process, evaluate.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::build::build_pool;
use crate::config::RollConfig;
use crate::dice::{DicePool, DieFace, DieRoll, RandomSource, roll};
use crate::error::{CortexResult, ValidationError};
use crate::request::RollRequest;
use crate::resolution::{RollOutcome, Verdict, process, success};
use crate::resolve::StepModifier;
use crate::traits::{TraitCategory, TraitStore};
use crate::validate::validate_with_limit;

/// Something the presentation layer should point out alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// Only two dice were rolled, so the effect die fell back to d4.
    EffectDefaulted,
    /// Several traits from one category went into the pool.
    MultipleFromCategory {
        /// The repeated category.
        category: TraitCategory,
        /// Trait keys from that category, in pool order.
        traits: Vec<String>,
    },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EffectDefaulted => write!(f, "effect die defaulted to d4 (only two dice rolled)"),
            Self::MultipleFromCategory { category, traits } => {
                write!(f, "using multiple {category} traits ({})", traits.join(", "))
            }
        }
    }
}

/// One rolled die as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolledDie<'a> {
    /// Pool index.
    pub index: usize,
    /// The value rolled.
    pub value: u32,
    /// The die's face.
    pub face: DieFace,
    /// The trait category, or `None` for raw and echo dice.
    pub category: Option<TraitCategory>,
    /// The trait key, or `None` for raw and echo dice.
    pub trait_name: Option<&'a str>,
    /// The step applied to the trait, if any.
    pub step: Option<StepModifier>,
    /// True for the echo of a doubled trait.
    pub is_echo: bool,
}

/// Everything produced by one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollReport {
    /// The validated pool.
    pub pool: DicePool,
    /// One result per pool entry, in pool order.
    pub rolls: Vec<DieRoll>,
    /// Total, effect die, hitches, and botch flag.
    pub outcome: RollOutcome,
    /// The difficulty rolled against, if any.
    pub difficulty: Option<u32>,
    /// Whether the total met the difficulty. Always false on a botch.
    pub success: bool,
    /// Whether the total beat the difficulty by the heroic margin.
    pub heroic: bool,
    /// The overall verdict.
    pub verdict: Verdict,
    /// Points for the presentation layer to surface.
    pub notices: Vec<Notice>,
}

impl RollReport {
    /// Rolled dice in pool order.
    pub fn entries(&self) -> impl Iterator<Item = RolledDie<'_>> {
        self.rolls.iter().enumerate().map(|(index, r)| RolledDie {
            index,
            value: r.value,
            face: r.die.face,
            category: r.die.category,
            trait_name: r.die.trait_name.as_deref(),
            step: r.die.step,
            is_echo: r.echo_of.is_some(),
        })
    }

    /// Values rolled by the echoes of the die at `index`.
    pub fn echo_values(&self, index: usize) -> Vec<u32> {
        self.rolls
            .iter()
            .filter(|r| r.echo_of == Some(index))
            .map(|r| r.value)
            .collect()
    }

    /// Returns true if the effect-defaulted notice is present.
    pub fn effect_defaulted_notice(&self) -> bool {
        self.notices.contains(&Notice::EffectDefaulted)
    }
}

/// Resolve a roll request for a character.
pub fn roll_check<S, R>(
    store: &S,
    request: &RollRequest,
    rng: &mut R,
    config: &RollConfig,
) -> CortexResult<RollReport>
where
    S: TraitStore + ?Sized,
    R: RandomSource + ?Sized,
{
    if request.tokens.len() > config.max_pool_size {
        return Err(ValidationError::PoolTooLarge {
            size: request.tokens.len(),
            max: config.max_pool_size,
        }
        .into());
    }

    let pool = build_pool(store, &request.tokens)?;
    if let Err(e) = validate_with_limit(&pool, config.max_pool_size) {
        tracing::debug!(error = %e, "pool rejected");
        return Err(e.into());
    }

    let rolls = roll(&pool, rng);
    let outcome = process(&rolls);

    let (success, heroic) = if outcome.is_botch {
        (false, false)
    } else {
        success::evaluate(outcome.total, request.difficulty)
    };
    let verdict = Verdict::from_outcome(&outcome, request.difficulty, success::HEROIC_MARGIN);

    let mut notices = Vec::new();
    if pool.count() == 2 && !outcome.is_botch {
        notices.push(Notice::EffectDefaulted);
    }
    if config.category_notices {
        notices.extend(category_notices(&pool));
    }

    tracing::debug!(%verdict, total = outcome.total, "roll resolved");

    Ok(RollReport {
        pool,
        rolls,
        outcome,
        difficulty: request.difficulty,
        success,
        heroic,
        verdict,
        notices,
    })
}

fn category_notices(pool: &DicePool) -> Vec<Notice> {
    let mut by_category: BTreeMap<TraitCategory, Vec<String>> = BTreeMap::new();
    for die in pool.dice() {
        if let (Some(category), Some(name)) = (die.category, &die.trait_name) {
            by_category.entry(category).or_default().push(name.clone());
        }
    }

    by_category
        .into_iter()
        .filter(|(_, traits)| traits.len() > 1)
        .map(|(category, traits)| Notice::MultipleFromCategory { category, traits })
        .collect()
}
