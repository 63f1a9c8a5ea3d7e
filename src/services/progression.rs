//! Adaptive load progression and rest time recommendations

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ceil_to_step, round2};
use crate::objective::{ExerciseCategory, TrainingObjective};

/// Loads at or above this are rounded to plate increments
const PLATE_ROUNDING_MIN_WEIGHT: f64 = 20.0;

/// Smallest plate increment for free weights
const PLATE_STEP: f64 = 2.5;

/// Intensity ratios (weight / estimated 1RM) that extend rest
const HIGH_INTENSITY: f64 = 0.85;
const MODERATE_INTENSITY: f64 = 0.70;

/// True when at least `target_sets` sets reached `target_reps`
pub fn should_increase_weight(target_reps: u32, achieved_reps: &[u32], target_sets: usize) -> bool {
    if achieved_reps.len() < target_sets {
        return false;
    }

    let successful_sets = achieved_reps.iter().filter(|&&reps| reps >= target_reps).count();
    successful_sets >= target_sets
}

/// Next recommended load; unchanged when the session was not a success
pub fn calculate_next_weight(
    current_weight: f64,
    progression_success: bool,
    objective: TrainingObjective,
    category: ExerciseCategory,
) -> f64 {
    if !progression_success {
        return current_weight;
    }

    let raw_increase = current_weight * objective.load_increase() * category.increase_multiplier();
    let increase = if current_weight >= PLATE_ROUNDING_MIN_WEIGHT {
        ceil_to_step(raw_increase, PLATE_STEP)
    } else {
        ceil_to_step(raw_increase, 1.0)
    };

    let next = round2(current_weight + increase);
    debug!(current_weight, raw_increase, increase, next, %objective, %category, "load progression");
    next
}

/// Recommended rest between sets, in seconds
///
/// `category` does not affect the result yet; it is kept so callers can pass it
/// once category-specific rest is added.
pub fn calculate_rest_seconds(
    _category: ExerciseCategory,
    objective: TrainingObjective,
    intensity_ratio: f64,
) -> u32 {
    let base = objective.base_rest_secs();

    if intensity_ratio >= HIGH_INTENSITY {
        base + 60
    } else if intensity_ratio >= MODERATE_INTENSITY {
        base + 30
    } else {
        base
    }
}

/// Planned exercise in a workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExercisePlan {
    pub target_sets: usize,
    pub target_reps: u32,
    pub target_weight: Option<f64>,
    #[serde(default = "default_auto_progression")]
    pub auto_progression: bool,
    #[serde(default)]
    pub category: ExerciseCategory,
}

fn default_auto_progression() -> bool {
    true
}

/// Load to use next session, given the reps of the completed sets
pub fn suggested_weight(
    plan: &ExercisePlan,
    completed_reps: &[u32],
    objective: TrainingObjective,
) -> Option<f64> {
    if !plan.auto_progression || completed_reps.is_empty() {
        return plan.target_weight;
    }

    let success = should_increase_weight(plan.target_reps, completed_reps, plan.target_sets);
    Some(calculate_next_weight(
        plan.target_weight.unwrap_or(0.0),
        success,
        objective,
        plan.category,
    ))
}

/// Share of planned sets completed, capped at 100
pub fn progress_percentage(completed_sets: usize, target_sets: usize) -> f64 {
    if target_sets == 0 {
        return 0.0;
    }
    (completed_sets as f64 / target_sets as f64 * 100.0).min(100.0)
}
