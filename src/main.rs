//! mycoach - Coaching calculations from the command line

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use mycoach::services::stats::DEFAULT_TREND_DAYS;
use mycoach::services::{
    BmiResult, OneRmFormula, PerformancePoint, WorkoutLog, calculate_next_weight,
    calculate_rest_seconds, progression_trend_at, should_increase_weight, weekly_volume,
};
use mycoach::{ExerciseCategory, TrainingObjective, UserProfile};

#[derive(Parser)]
#[command(name = "mycoach")]
#[command(author, version, about = "Coaching calculations: BMI, 1RM, progression, rest and trends")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Body mass index and its category
    Bmi {
        /// Weight in kg
        #[arg(short, long)]
        weight: f64,

        /// Height in cm
        #[arg(long)]
        height: f64,
    },

    /// Estimate a one-rep max from a submaximal set
    OneRm {
        /// Weight lifted
        #[arg(short, long)]
        weight: f64,

        /// Repetitions performed
        #[arg(short, long)]
        reps: u32,

        /// brzycki, epley or adaptive
        #[arg(short, long, default_value = "brzycki")]
        formula: String,

        /// Age, used by the adaptive formula
        #[arg(long, env = "MYCOACH_AGE", default_value = "30")]
        age: u32,

        /// Training objective (muscle_gain, weight_loss, maintenance)
        #[arg(short, long, env = "MYCOACH_OBJECTIVE", default_value = "maintenance")]
        objective: TrainingObjective,
    },

    /// Decide the next load after a session
    Progress {
        /// Load used this session
        #[arg(short = 'w', long)]
        current_weight: f64,

        /// Target reps per set
        #[arg(short = 'r', long)]
        target_reps: u32,

        /// Target number of sets
        #[arg(short = 's', long)]
        target_sets: usize,

        /// Reps achieved per set, e.g. 10,10,9
        #[arg(short, long, value_delimiter = ',')]
        achieved: Vec<u32>,

        #[arg(short, long, env = "MYCOACH_OBJECTIVE", default_value = "maintenance")]
        objective: TrainingObjective,

        /// strength, endurance, power or cardio
        #[arg(short, long, default_value = "strength")]
        category: ExerciseCategory,
    },

    /// Recommended rest between sets
    Rest {
        /// Weight used divided by estimated 1RM
        #[arg(short, long)]
        intensity: f64,

        #[arg(short, long, env = "MYCOACH_OBJECTIVE", default_value = "maintenance")]
        objective: TrainingObjective,

        #[arg(short, long, default_value = "strength")]
        category: ExerciseCategory,
    },

    /// Volume totals from a JSON list of workouts
    Volume {
        /// JSON file: [{"exercises": [{"series": [{"reps": 10, "weight": 50}]}]}]
        file: PathBuf,
    },

    /// Progression trend from a JSON performance history
    Trend {
        /// JSON file: [{"date": "2026-10-01", "max_weight": 100}]
        file: PathBuf,

        /// Window in days
        #[arg(short, long, env = "MYCOACH_TREND_DAYS", default_value_t = DEFAULT_TREND_DAYS)]
        days: u32,
    },

    /// Validate a profile and show its BMI
    Profile {
        #[arg(short, long)]
        weight: f64,

        #[arg(long)]
        height: f64,

        #[arg(short, long, env = "MYCOACH_AGE")]
        age: u32,

        #[arg(short, long, env = "MYCOACH_OBJECTIVE", default_value = "maintenance")]
        objective: TrainingObjective,
    },
}

#[derive(Serialize)]
struct OneRmOutput {
    formula: OneRmFormula,
    one_rm: f64,
}

#[derive(Serialize)]
struct ProgressOutput {
    increase: bool,
    next_weight: f64,
}

#[derive(Serialize)]
struct RestOutput {
    rest_seconds: u32,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Print `value` as JSON, or the text rendering otherwise
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Bmi { weight, height } => {
            let result = BmiResult::from_measurements(weight, height)?;
            emit(json, &result, || result.format())?;
        }

        Commands::OneRm { weight, reps, formula, age, objective } => {
            let Some(formula) = OneRmFormula::from_tag(&formula) else {
                bail!("Unknown formula: {formula} (expected brzycki, epley or adaptive)");
            };
            let one_rm = formula.estimate(weight, reps, age, objective)?;
            let output = OneRmOutput { formula, one_rm };
            emit(json, &output, || format!("Estimated 1RM: {:.2}", one_rm))?;
        }

        Commands::Progress {
            current_weight,
            target_reps,
            target_sets,
            achieved,
            objective,
            category,
        } => {
            let increase = should_increase_weight(target_reps, &achieved, target_sets);
            let next_weight = calculate_next_weight(current_weight, increase, objective, category);
            let output = ProgressOutput { increase, next_weight };
            emit(json, &output, || {
                if increase {
                    format!("Increase: {} -> {}", current_weight, next_weight)
                } else {
                    format!("Keep: {}", next_weight)
                }
            })?;
        }

        Commands::Rest { intensity, objective, category } => {
            let rest_seconds = calculate_rest_seconds(category, objective, intensity);
            let output = RestOutput { rest_seconds };
            emit(json, &output, || {
                format!("Rest: {}s ({}m {}s)", rest_seconds, rest_seconds / 60, rest_seconds % 60)
            })?;
        }

        Commands::Volume { file } => {
            let workouts: Vec<WorkoutLog> = read_json(&file)?;
            info!(workouts = workouts.len(), "computing volume");
            let summary = weekly_volume(&workouts);
            emit(json, &summary, || summary.format())?;
        }

        Commands::Trend { file, days } => {
            let mut history: Vec<PerformancePoint> = read_json(&file)?;
            // Files are not guaranteed to be chronological
            history.sort_by_key(|p| p.date);
            info!(points = history.len(), days, "computing trend");
            let result = progression_trend_at(&history, days, Utc::now());
            emit(json, &result, || result.format())?;
        }

        Commands::Profile { weight, height, age, objective } => {
            let profile = UserProfile::new(weight, height, age, objective)?;
            emit(json, &profile, || profile.format())?;
        }
    }

    Ok(())
}
