//! Body mass index calculation and interpretation

use serde::{Deserialize, Serialize};

use super::round2;
use crate::error::{Result, ensure_positive};

/// BMI category, from fixed ascending thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SevereUnderweight, // < 16.5
    Underweight,       // < 18.5
    Normal,            // < 25
    Overweight,        // < 30
    ModerateObesity,   // < 35
    SevereObesity,     // < 40
    MorbidObesity,
}

impl BmiCategory {
    /// Upper bound (exclusive) of each bucket, in order
    const THRESHOLDS: [(f64, BmiCategory); 6] = [
        (16.5, BmiCategory::SevereUnderweight),
        (18.5, BmiCategory::Underweight),
        (25.0, BmiCategory::Normal),
        (30.0, BmiCategory::Overweight),
        (35.0, BmiCategory::ModerateObesity),
        (40.0, BmiCategory::SevereObesity),
    ];

    /// Lower (inclusive) and upper (exclusive) BMI bounds of this bucket
    pub fn bounds(&self) -> (f64, f64) {
        let position = Self::THRESHOLDS.iter().position(|(_, category)| category == self);
        match position {
            Some(0) => (0.0, Self::THRESHOLDS[0].0),
            Some(i) => (Self::THRESHOLDS[i - 1].0, Self::THRESHOLDS[i].0),
            None => (Self::THRESHOLDS[Self::THRESHOLDS.len() - 1].0, f64::INFINITY),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::SevereUnderweight => "Severe underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ModerateObesity => "Moderate obesity",
            BmiCategory::SevereObesity => "Severe obesity",
            BmiCategory::MorbidObesity => "Morbid obesity",
        }
    }

    pub fn label_fr(&self) -> &'static str {
        match self {
            BmiCategory::SevereUnderweight => "Dénutrition ou famine",
            BmiCategory::Underweight => "Maigreur",
            BmiCategory::Normal => "Corpulence normale",
            BmiCategory::Overweight => "Surpoids",
            BmiCategory::ModerateObesity => "Obésité modérée",
            BmiCategory::SevereObesity => "Obésité sévère",
            BmiCategory::MorbidObesity => "Obésité morbide",
        }
    }
}

/// Computed BMI with its interpretation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn from_measurements(weight_kg: f64, height_cm: f64) -> Result<Self> {
        let bmi = calculate_bmi(weight_kg, height_cm)?;
        Ok(Self {
            bmi,
            category: interpret_bmi(bmi),
        })
    }

    pub fn format(&self) -> String {
        format!("BMI: {:.2} ({})", self.bmi, self.category.label())
    }
}

/// BMI in kg/m², rounded to two decimals
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    let weight = ensure_positive("weight", weight_kg)?;
    let height_m = ensure_positive("height", height_cm)? / 100.0;
    Ok(round2(weight / (height_m * height_m)))
}

/// Map a BMI value to its category; a value equal to a threshold falls in the next bucket up
///
/// NaN fails every threshold comparison and maps to `MorbidObesity`. `calculate_bmi`
/// rejects the inputs that could produce it.
pub fn interpret_bmi(bmi: f64) -> BmiCategory {
    BmiCategory::THRESHOLDS
        .iter()
        .find(|(upper, _)| bmi < *upper)
        .map(|(_, category)| *category)
        .unwrap_or(BmiCategory::MorbidObesity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use proptest::prelude::*;

    #[test]
    fn test_calculate_bmi_reference() {
        assert_eq!(calculate_bmi(70.0, 175.0).unwrap(), 22.86);
    }

    #[test]
    fn test_interpret_reference() {
        let result = BmiResult::from_measurements(70.0, 175.0).unwrap();
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.category.label_fr(), "Corpulence normale");
    }

    #[test]
    fn test_calculate_bmi_invalid() {
        assert!(matches!(
            calculate_bmi(0.0, 175.0),
            Err(CalcError::InvalidArgument { name: "weight", .. })
        ));
        assert!(matches!(
            calculate_bmi(70.0, -1.0),
            Err(CalcError::InvalidArgument { name: "height", .. })
        ));
    }

    #[test]
    fn test_interpret_boundaries_go_up() {
        assert_eq!(interpret_bmi(16.49), BmiCategory::SevereUnderweight);
        assert_eq!(interpret_bmi(16.5), BmiCategory::Underweight);
        assert_eq!(interpret_bmi(18.5), BmiCategory::Normal);
        assert_eq!(interpret_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(interpret_bmi(30.0), BmiCategory::ModerateObesity);
        assert_eq!(interpret_bmi(35.0), BmiCategory::SevereObesity);
        assert_eq!(interpret_bmi(40.0), BmiCategory::MorbidObesity);
        assert_eq!(interpret_bmi(55.3), BmiCategory::MorbidObesity);
    }

    #[test]
    fn test_bounds_follow_thresholds() {
        assert_eq!(BmiCategory::SevereUnderweight.bounds(), (0.0, 16.5));
        assert_eq!(BmiCategory::Normal.bounds(), (18.5, 25.0));
        assert_eq!(BmiCategory::SevereObesity.bounds(), (35.0, 40.0));
        assert_eq!(BmiCategory::MorbidObesity.bounds(), (40.0, f64::INFINITY));
    }

    #[test]
    fn test_interpret_nan_is_top_bucket() {
        assert_eq!(interpret_bmi(f64::NAN), BmiCategory::MorbidObesity);
        assert!(calculate_bmi(f64::NAN, 175.0).is_err());
        assert!(calculate_bmi(70.0, f64::NAN).is_err());
    }

    #[test]
    fn test_format() {
        let result = BmiResult::from_measurements(70.0, 175.0).unwrap();
        assert_eq!(result.format(), "BMI: 22.86 (Normal)");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_bmi_deterministic_single_bucket(
            weight in 1.0f64..400.0,
            height in 50.0f64..260.0
        ) {
            let first = calculate_bmi(weight, height).unwrap();
            let second = calculate_bmi(weight, height).unwrap();
            prop_assert_eq!(first, second);

            let (lower, upper) = interpret_bmi(first).bounds();
            prop_assert!(
                lower <= first && first < upper,
                "BMI {} outside [{}, {})", first, lower, upper
            );
        }
    }
}
