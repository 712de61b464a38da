//! The selection pipeline: eligibility filter, sampling without replacement
//! (uniform or weighted), per-operator skill assignment, and the final stable
//! sort. Runs to completion in one call; on failure the caller's prior
//! selection is untouched.

use std::fmt;

use serde::Serialize;

use crate::engine::rng::Rng;
use crate::engine::weights::selection_weight;
use crate::roster::Operator;

/// Every selection produces exactly this many operators.
pub const SQUAD_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Weighted draw by level and rarity/elite bonus instead of a plain shuffle.
    pub use_level_weighting: bool,
    /// Drop elite 0 / level 1 operators before drawing.
    pub ignore_unleveled_base: bool,
}

/// An operator decorated with the skill level assigned for this run. A new
/// value each run; nothing is stamped back onto the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedOperator {
    #[serde(flatten)]
    pub operator: Operator,
    pub skill: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    Insufficient { required: usize, available: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insufficient {
                required,
                available,
            } => write!(
                f,
                "not enough eligible operators: need {required}, have {available}"
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Draws [SQUAD_SIZE] distinct operators from `roster` and assigns each a
/// skill level. The result is sorted by elite, then level, then rarity, all
/// descending, with draw order preserved on full ties.
pub fn select_squad(
    roster: &[Operator],
    config: SelectionConfig,
    rng: &mut Rng,
) -> Result<Vec<SelectedOperator>, SelectionError> {
    if roster.len() < SQUAD_SIZE {
        return Err(SelectionError::Insufficient {
            required: SQUAD_SIZE,
            available: roster.len(),
        });
    }

    let pool: Vec<&Operator> = if config.ignore_unleveled_base {
        roster.iter().filter(|op| !op.is_unleveled_base()).collect()
    } else {
        roster.iter().collect()
    };
    // The filter may have thinned the pool below the squad size; that is a
    // hard failure with the post-filter count, never a fallback to the
    // unfiltered roster.
    if pool.len() < SQUAD_SIZE {
        return Err(SelectionError::Insufficient {
            required: SQUAD_SIZE,
            available: pool.len(),
        });
    }

    let drawn = if config.use_level_weighting {
        draw_weighted(&pool, SQUAD_SIZE, rng)
    } else {
        draw_uniform(&pool, SQUAD_SIZE, rng)
    };

    let mut selection: Vec<SelectedOperator> = drawn
        .into_iter()
        .map(|operator| {
            let skill = assign_skill(&operator, rng);
            SelectedOperator { operator, skill }
        })
        .collect();

    // Vec::sort_by is stable, so equal keys keep their draw order.
    selection.sort_by(|a, b| {
        let a = &a.operator;
        let b = &b.operator;
        b.elite
            .cmp(&a.elite)
            .then(b.level.cmp(&a.level))
            .then(b.rarity.cmp(&a.rarity))
    });

    Ok(selection)
}

/// Fisher-Yates shuffle truncated to the first `count` entries.
fn draw_uniform(pool: &[&Operator], count: usize, rng: &mut Rng) -> Vec<Operator> {
    let mut shuffled: Vec<&Operator> = pool.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.next_index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled.into_iter().take(count).cloned().collect()
}

/// Repeated proportional draws over a shrinking pool. Weights are computed
/// once up front; removing a drawn operator is the only state change between
/// rounds. A zero total weight degrades to a uniform draw over the remainder.
fn draw_weighted(pool: &[&Operator], count: usize, rng: &mut Rng) -> Vec<Operator> {
    let mut remaining: Vec<(&Operator, u64)> = pool
        .iter()
        .map(|&op| (op, selection_weight(op)))
        .collect();

    let mut drawn = Vec::with_capacity(count);
    while drawn.len() < count && !remaining.is_empty() {
        let total: u64 = remaining.iter().map(|(_, weight)| weight).sum();
        let picked = if total == 0 {
            rng.next_index(remaining.len())
        } else {
            // First index where the running weight sum exceeds the draw.
            // Zero-weight entries never advance the sum, so they cannot win
            // while any positive weight remains.
            let mut draw = rng.next_below(total);
            let mut picked = remaining.len() - 1;
            for (index, (_, weight)) in remaining.iter().enumerate() {
                if draw < *weight {
                    picked = index;
                    break;
                }
                draw -= weight;
            }
            picked
        };
        drawn.push(remaining.remove(picked).0.clone());
    }
    drawn
}

/// Skill level for one selected operator. Fully promoted six-stars roll over
/// all three skills; low rarity and first-promotion operators are pinned to
/// skill 1; everything else rolls between the first two.
pub fn assign_skill(operator: &Operator, rng: &mut Rng) -> u8 {
    if operator.rarity == 6 && operator.elite == 2 {
        rng.next_below(3) as u8 + 1
    } else if operator.rarity <= 3 || operator.elite == 1 {
        1
    } else {
        rng.next_below(2) as u8 + 1
    }
}
