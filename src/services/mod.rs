//! Coaching calculation services
//!
//! Features:
//! - BMI calculation and interpretation
//! - One-rep max estimation (Brzycki, Epley, age/objective adapted)
//! - Load progression and rest time recommendations
//! - Volume statistics and progression trends
//!
//! All services are pure functions of their arguments.

pub mod bmi;
pub mod one_rep_max;
pub mod progression;
pub mod stats;

pub use bmi::{BmiCategory, BmiResult, calculate_bmi, interpret_bmi};
pub use one_rep_max::{OneRmFormula, adaptive_one_rm, brzycki, epley};
pub use progression::{
    ExercisePlan, calculate_next_weight, calculate_rest_seconds, progress_percentage,
    should_increase_weight, suggested_weight,
};
pub use stats::{
    ExerciseLog, FrequencySummary, PerformancePoint, SetLog, Trend, TrendResult, VolumeSummary,
    WorkoutLog, progression_trend, progression_trend_at, weekly_volume, workout_frequency,
};

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to `decimals` decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round up to the next multiple of `step` (`ceil(x / step) * step`)
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(22.857142), 22.86);
        assert_eq!(round2(116.666666), 116.67);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round_to_one_decimal() {
        assert_eq!(round_to(4.2857, 1), 4.3);
    }

    #[test]
    fn test_ceil_to_step_exact_multiple() {
        assert_eq!(ceil_to_step(5.0, 2.5), 5.0);
    }

    #[test]
    fn test_ceil_to_step_rounds_up() {
        assert_eq!(ceil_to_step(3.5, 2.5), 5.0);
        assert_eq!(ceil_to_step(0.1, 2.5), 2.5);
        assert_eq!(ceil_to_step(0.75, 1.0), 1.0);
    }

    #[test]
    fn test_ceil_to_step_zero() {
        assert_eq!(ceil_to_step(0.0, 2.5), 0.0);
    }
}
