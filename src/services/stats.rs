//! Training statistics: volume totals, progression trends and workout frequency

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::one_rep_max::brzycki;
use super::{round2, round_to};

/// Default trend window in days
pub const DEFAULT_TREND_DAYS: u32 = 30;

/// Single performed set
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SetLog {
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl SetLog {
    pub fn new(reps: u32, weight: f64) -> Self {
        Self {
            reps: Some(reps),
            weight: Some(weight),
        }
    }

    /// weight × reps, missing values count as 0
    pub fn volume(&self) -> f64 {
        self.weight.unwrap_or(0.0) * f64::from(self.reps.unwrap_or(0))
    }

    /// Brzycki estimate for this set, when weight and reps allow one
    pub fn estimated_one_rm(&self) -> Option<f64> {
        let (weight, reps) = (self.weight?, self.reps?);
        brzycki(weight, reps).ok()
    }
}

/// Exercise inside a workout, with its sets
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExerciseLog {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "sets")]
    pub series: Vec<SetLog>,
}

/// Workout with its exercises
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkoutLog {
    #[serde(default)]
    pub exercises: Vec<ExerciseLog>,
}

/// Aggregated volume over a set of workouts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VolumeSummary {
    pub total_sets: usize,
    pub total_reps: u64,
    pub total_volume: f64,
    pub exercises_count: usize,
    pub average_volume_per_exercise: f64,
}

impl VolumeSummary {
    pub fn format(&self) -> String {
        [
            format!("Sets: {}", self.total_sets),
            format!("Reps: {}", self.total_reps),
            format!("Volume: {:.2}", self.total_volume),
            format!("Exercises: {}", self.exercises_count),
            format!("Average per exercise: {:.2}", self.average_volume_per_exercise),
        ]
        .join("\n")
    }
}

/// Sum sets, reps and volume over every exercise of every workout
pub fn weekly_volume(workouts: &[WorkoutLog]) -> VolumeSummary {
    let mut total_sets = 0;
    let mut total_reps: u64 = 0;
    let mut total_volume = 0.0;
    let mut exercises_count = 0;

    for exercise in workouts.iter().flat_map(|w| &w.exercises) {
        exercises_count += 1;
        for set in &exercise.series {
            total_sets += 1;
            total_reps += u64::from(set.reps.unwrap_or(0));
            total_volume += set.volume();
        }
    }

    VolumeSummary {
        total_sets,
        total_reps,
        total_volume: round2(total_volume),
        exercises_count,
        average_volume_per_exercise: round2(total_volume / exercises_count.max(1) as f64),
    }
}

/// Best load recorded on a given date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformancePoint {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub max_weight: f64,
}

/// RFC 3339, or a naive datetime/date read as UTC
fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Trend classification of a progression window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    InsufficientData,
    NoBaseline,
    StrongImprovement,
    Improvement,
    Stable,
    SlightDecline,
    Decline,
}

impl Trend {
    /// Classify a percentage change between baseline and current
    pub fn from_change(percentage_change: f64) -> Self {
        if percentage_change > 5.0 {
            Trend::StrongImprovement
        } else if percentage_change > 1.0 {
            Trend::Improvement
        } else if percentage_change > -1.0 {
            Trend::Stable
        } else if percentage_change > -5.0 {
            Trend::SlightDecline
        } else {
            Trend::Decline
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::InsufficientData => "insufficient data",
            Trend::NoBaseline => "no baseline",
            Trend::StrongImprovement => "strong improvement",
            Trend::Improvement => "improvement",
            Trend::Stable => "stable",
            Trend::SlightDecline => "slight decline",
            Trend::Decline => "decline",
        }
    }
}

/// Progression trend over a window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendResult {
    pub trend: Trend,
    pub percentage_change: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_points: Option<usize>,
}

impl TrendResult {
    fn without_change(trend: Trend) -> Self {
        Self {
            trend,
            percentage_change: 0.0,
            period_days: None,
            data_points: None,
        }
    }

    pub fn format(&self) -> String {
        let mut line = format!("Trend: {}", self.trend.label());
        if let (Some(days), Some(points)) = (self.period_days, self.data_points) {
            let sign = if self.percentage_change >= 0.0 { "+" } else { "" };
            line.push_str(&format!(
                " ({sign}{:.2}% over {days} days, {points} points)",
                self.percentage_change
            ));
        }
        line
    }
}

/// Start of a `days_period` window ending at `now`
///
/// A window reaching past the earliest representable date starts there.
fn window_start(now: DateTime<Utc>, days_period: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(days_period))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Trend over the last `days_period` days, relative to now
pub fn progression_trend(history: &[PerformancePoint], days_period: u32) -> TrendResult {
    progression_trend_at(history, days_period, Utc::now())
}

/// Trend over `[now - days_period, ...]`
///
/// Baseline and current are the first and last points kept, in input order;
/// callers pass chronological history.
pub fn progression_trend_at(
    history: &[PerformancePoint],
    days_period: u32,
    now: DateTime<Utc>,
) -> TrendResult {
    let cutoff = window_start(now, days_period);
    let recent: Vec<_> = history.iter().filter(|p| p.date >= cutoff).collect();

    let [first, .., last] = recent.as_slice() else {
        return TrendResult::without_change(Trend::InsufficientData);
    };
    if first.max_weight == 0.0 {
        return TrendResult::without_change(Trend::NoBaseline);
    }

    let percentage_change = (last.max_weight - first.max_weight) / first.max_weight * 100.0;
    let trend = Trend::from_change(percentage_change);
    debug!(days_period, points = recent.len(), percentage_change, ?trend, "progression trend");

    TrendResult {
        trend,
        percentage_change: round2(percentage_change),
        period_days: Some(days_period),
        data_points: Some(recent.len()),
    }
}

/// Workout count over a window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrequencySummary {
    pub total_workouts: usize,
    pub days_period: u32,
    pub average_per_week: f64,
}

/// Count workouts dated within the last `days_period` days
pub fn workout_frequency(
    dates: &[DateTime<Utc>],
    days_period: u32,
    now: DateTime<Utc>,
) -> FrequencySummary {
    let cutoff = window_start(now, days_period);
    let total_workouts = dates.iter().filter(|d| **d >= cutoff).count();

    let average_per_week = if days_period == 0 {
        0.0
    } else {
        round_to(total_workouts as f64 / (f64::from(days_period) / 7.0), 1)
    };

    FrequencySummary {
        total_workouts,
        days_period,
        average_per_week,
    }
}
