//! Training objectives and exercise categories - the lookup keys of every formula

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Main training goal selected by the user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingObjective {
    MuscleGain,  // Prise de masse
    WeightLoss,  // Sèche
    #[default]
    Maintenance, // Maintien/Forme
}

impl TrainingObjective {
    /// Lenient parse: unknown tags fall back to the neutral objective
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().replace('-', "_").as_str() {
            "muscle_gain" => TrainingObjective::MuscleGain,
            "weight_loss" => TrainingObjective::WeightLoss,
            _ => TrainingObjective::Maintenance,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            TrainingObjective::MuscleGain => "muscle_gain",
            TrainingObjective::WeightLoss => "weight_loss",
            TrainingObjective::Maintenance => "maintenance",
        }
    }

    /// Multiplier applied to an adaptive 1RM estimate
    pub fn one_rm_factor(&self) -> f64 {
        match self {
            TrainingObjective::MuscleGain => 1.05,
            TrainingObjective::WeightLoss => 0.95,
            TrainingObjective::Maintenance => 1.0,
        }
    }

    /// Fraction of the current load added after a successful session
    pub fn load_increase(&self) -> f64 {
        match self {
            TrainingObjective::MuscleGain => 0.05,
            TrainingObjective::WeightLoss => 0.025,
            TrainingObjective::Maintenance => 0.035,
        }
    }

    /// Base rest between sets, in seconds
    pub fn base_rest_secs(&self) -> u32 {
        match self {
            TrainingObjective::MuscleGain => 120,
            TrainingObjective::WeightLoss => 60,
            TrainingObjective::Maintenance => 90,
        }
    }

    pub fn all() -> &'static [TrainingObjective] {
        &[
            TrainingObjective::MuscleGain,
            TrainingObjective::WeightLoss,
            TrainingObjective::Maintenance,
        ]
    }
}

impl fmt::Display for TrainingObjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TrainingObjective {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

/// Kind of exercise, used to scale load increments
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    #[default]
    Strength,
    Endurance,
    Power,
    Cardio,
}

impl ExerciseCategory {
    /// Lenient parse: unknown tags fall back to strength
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "endurance" => ExerciseCategory::Endurance,
            "power" => ExerciseCategory::Power,
            "cardio" => ExerciseCategory::Cardio,
            _ => ExerciseCategory::Strength,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ExerciseCategory::Strength => "strength",
            ExerciseCategory::Endurance => "endurance",
            ExerciseCategory::Power => "power",
            ExerciseCategory::Cardio => "cardio",
        }
    }

    /// Scales the objective's load increase
    pub fn increase_multiplier(&self) -> f64 {
        match self {
            ExerciseCategory::Endurance => 0.7,
            ExerciseCategory::Power => 1.2,
            // strength, and anything without its own multiplier
            _ => 1.0,
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ExerciseCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_from_tag() {
        assert_eq!(TrainingObjective::from_tag("muscle_gain"), TrainingObjective::MuscleGain);
        assert_eq!(TrainingObjective::from_tag("Weight-Loss"), TrainingObjective::WeightLoss);
        assert_eq!(TrainingObjective::from_tag("maintenance"), TrainingObjective::Maintenance);
    }

    #[test]
    fn test_unknown_objective_is_neutral() {
        let objective = TrainingObjective::from_tag("bulk");
        assert_eq!(objective, TrainingObjective::Maintenance);
        assert_eq!(objective.one_rm_factor(), 1.0);
        assert_eq!(objective.load_increase(), 0.035);
        assert_eq!(objective.base_rest_secs(), 90);
    }

    #[test]
    fn test_objective_tag_roundtrip() {
        for objective in TrainingObjective::all() {
            assert_eq!(TrainingObjective::from_tag(objective.tag()), *objective);
        }
    }

    #[test]
    fn test_objective_serde_snake_case() {
        let json = serde_json::to_string(&TrainingObjective::MuscleGain).unwrap();
        assert_eq!(json, "\"muscle_gain\"");
    }

    #[test]
    fn test_category_multipliers() {
        assert_eq!(ExerciseCategory::Strength.increase_multiplier(), 1.0);
        assert_eq!(ExerciseCategory::Endurance.increase_multiplier(), 0.7);
        assert_eq!(ExerciseCategory::Power.increase_multiplier(), 1.2);
        assert_eq!(ExerciseCategory::Cardio.increase_multiplier(), 1.0);
    }

    #[test]
    fn test_unknown_category_is_strength() {
        assert_eq!(ExerciseCategory::from_tag("yoga"), ExerciseCategory::Strength);
        assert_eq!("power".parse::<ExerciseCategory>(), Ok(ExerciseCategory::Power));
    }
}
