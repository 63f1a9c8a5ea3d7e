//! mycoach - Coaching calculations
//!
//! BMI, one-rep max estimation, load progression, rest time and training trends.

pub mod error;
pub mod objective;
pub mod profile;
pub mod services;

pub use error::{CalcError, Result};
pub use objective::{ExerciseCategory, TrainingObjective};
pub use profile::UserProfile;
