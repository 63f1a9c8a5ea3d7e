//! User profile - body measurements and training objective

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::objective::TrainingObjective;
use crate::services::{BmiCategory, adaptive_one_rm, calculate_bmi, interpret_bmi};

const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=300.0;
const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;
const AGE_RANGE: RangeInclusive<u32> = 13..=120;

/// Measurements needed by the personalised calculations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    #[serde(default)]
    pub objective: TrainingObjective,
}

impl UserProfile {
    pub fn new(weight_kg: f64, height_cm: f64, age: u32, objective: TrainingObjective) -> Result<Self> {
        if !WEIGHT_RANGE_KG.contains(&weight_kg) {
            return Err(CalcError::invalid("weight", weight_kg));
        }
        if !HEIGHT_RANGE_CM.contains(&height_cm) {
            return Err(CalcError::invalid("height", height_cm));
        }
        if !AGE_RANGE.contains(&age) {
            return Err(CalcError::invalid("age", age));
        }

        Ok(Self {
            weight_kg,
            height_cm,
            age,
            objective,
        })
    }

    pub fn bmi(&self) -> Result<f64> {
        calculate_bmi(self.weight_kg, self.height_cm)
    }

    pub fn bmi_category(&self) -> Result<BmiCategory> {
        self.bmi().map(interpret_bmi)
    }

    /// 1RM estimate adapted to this user's age and objective
    pub fn adaptive_one_rm(&self, weight: f64, reps: u32) -> Result<f64> {
        adaptive_one_rm(weight, reps, self.age, self.objective)
    }

    pub fn format(&self) -> String {
        let bmi = self
            .bmi()
            .map(|bmi| format!("{:.2} ({})", bmi, interpret_bmi(bmi).label()))
            .unwrap_or_else(|_| "-".to_string());

        format!(
            "Weight: {} kg | Height: {} cm | Age: {} | Objective: {}\nBMI: {}",
            self.weight_kg, self.height_cm, self.age, self.objective, bmi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new(70.0, 175.0, 40, TrainingObjective::MuscleGain).unwrap()
    }

    #[test]
    fn test_profile_bmi() {
        let profile = profile();
        assert_eq!(profile.bmi().unwrap(), 22.86);
        assert_eq!(profile.bmi_category().unwrap(), BmiCategory::Normal);
    }

    #[test]
    fn test_profile_adaptive_one_rm() {
        // 100 * 0.95 * 1.05
        assert_eq!(profile().adaptive_one_rm(100.0, 1).unwrap(), 99.75);
    }

    #[test]
    fn test_profile_validation() {
        let objective = TrainingObjective::Maintenance;
        assert!(UserProfile::new(29.9, 175.0, 30, objective).is_err());
        assert!(UserProfile::new(70.0, 99.0, 30, objective).is_err());
        assert!(UserProfile::new(70.0, 175.0, 12, objective).is_err());
        assert!(UserProfile::new(70.0, 175.0, 121, objective).is_err());
        assert!(UserProfile::new(f64::NAN, 175.0, 30, objective).is_err());
        assert!(UserProfile::new(300.0, 250.0, 120, objective).is_ok());
    }

    #[test]
    fn test_profile_from_json_default_objective() {
        let json = r#"{"weight_kg": 80.0, "height_cm": 180.0, "age": 35}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.objective, TrainingObjective::Maintenance);
    }

    #[test]
    fn test_profile_format() {
        let formatted = profile().format();
        assert!(formatted.contains("Objective: muscle_gain"), "Format: {}", formatted);
        assert!(formatted.contains("BMI: 22.86 (Normal)"), "Format: {}", formatted);
    }
}
