//! One-rep max estimation from a submaximal set

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::round2;
use crate::error::{CalcError, Result, ensure_positive};
use crate::objective::TrainingObjective;

/// Age after which the adaptive estimate starts to decay
const AGE_DECAY_START: u32 = 30;

/// Adaptive estimate loses 0.5% per year past `AGE_DECAY_START`
const AGE_DECAY_PER_YEAR: f64 = 0.005;

/// Brzycki formula coefficients: w / (A - B * r)
const BRZYCKI_A: f64 = 1.0278;
const BRZYCKI_B: f64 = 0.0278;

/// Estimation formula selector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OneRmFormula {
    #[default]
    Brzycki,
    Epley,
    /// Brzycki adjusted for age and objective
    Adaptive,
}

fn validate(weight: f64, reps: u32) -> Result<f64> {
    if reps == 0 {
        return Err(CalcError::invalid("reps", reps));
    }
    ensure_positive("weight", weight)
}

/// Brzycki estimate, rounded to two decimals
///
/// The denominator reaches zero at 37 reps, so `reps >= 37` is rejected.
pub fn brzycki(weight: f64, reps: u32) -> Result<f64> {
    let weight = validate(weight, reps)?;
    if reps == 1 {
        return Ok(weight);
    }

    let denominator = BRZYCKI_A - BRZYCKI_B * f64::from(reps);
    if denominator <= 0.0 {
        return Err(CalcError::invalid("reps", reps));
    }

    Ok(round2(weight / denominator))
}

/// Epley estimate, rounded to two decimals
pub fn epley(weight: f64, reps: u32) -> Result<f64> {
    let weight = validate(weight, reps)?;
    if reps == 1 {
        return Ok(weight);
    }

    Ok(round2(weight * (1.0 + f64::from(reps) / 30.0)))
}

/// Linear decay past 30 years; not clamped
fn age_factor(age: u32) -> f64 {
    if age <= AGE_DECAY_START {
        1.0
    } else {
        1.0 - f64::from(age - AGE_DECAY_START) * AGE_DECAY_PER_YEAR
    }
}

/// Brzycki estimate scaled by age and training objective
pub fn adaptive_one_rm(
    weight: f64,
    reps: u32,
    age: u32,
    objective: TrainingObjective,
) -> Result<f64> {
    let base = brzycki(weight, reps)?;

    let age_factor = age_factor(age);
    if age_factor <= 0.0 {
        warn!(age, age_factor, "age factor is not positive, estimate will be meaningless");
    }

    Ok(round2(base * age_factor * objective.one_rm_factor()))
}

impl OneRmFormula {
    /// Estimate with this formula; `age` and `objective` only matter for `Adaptive`
    pub fn estimate(
        &self,
        weight: f64,
        reps: u32,
        age: u32,
        objective: TrainingObjective,
    ) -> Result<f64> {
        match self {
            OneRmFormula::Brzycki => brzycki(weight, reps),
            OneRmFormula::Epley => epley(weight, reps),
            OneRmFormula::Adaptive => adaptive_one_rm(weight, reps, age, objective),
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "brzycki" => Some(OneRmFormula::Brzycki),
            "epley" => Some(OneRmFormula::Epley),
            "adaptive" => Some(OneRmFormula::Adaptive),
            _ => None,
        }
    }
}
