//! Grid point row type and its classification enums
//!
//! One `GridPoint` is one row of the generated detection table. Field and
//! variant names follow the wire format consumed by the dashboard widgets
//! and the CSV export, so the serialized header reads:
//!
//! `lat, lon, anomaly_score, fire_probability, fire_classification,
//! confidence, grid_id, Pre-Fire, During-Fire, Post-Fire`

use crate::core_types::score::Score;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary fire classification of a grid point
///
/// `Fire` iff the point's fire probability exceeds the configured
/// threshold; everything else is `Non-Fire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FireClassification {
    /// Probability above the fire threshold
    Fire,
    /// Probability at or below the fire threshold
    #[serde(rename = "Non-Fire")]
    NonFire,
}

impl FireClassification {
    /// Both classifications, in display order
    pub const ALL: [FireClassification; 2] = [FireClassification::Fire, FireClassification::NonFire];

    /// Classify a fire probability against a threshold (strict `>`)
    #[must_use]
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        if probability > threshold {
            FireClassification::Fire
        } else {
            FireClassification::NonFire
        }
    }

    /// Wire/display name (`"Fire"` / `"Non-Fire"`)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FireClassification::Fire => "Fire",
            FireClassification::NonFire => "Non-Fire",
        }
    }
}

impl fmt::Display for FireClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named time window of the synthetic time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FirePeriod {
    /// Before the detected event
    #[serde(rename = "Pre-Fire")]
    PreFire,
    /// During the detected event
    #[serde(rename = "During-Fire")]
    DuringFire,
    /// After the detected event
    #[serde(rename = "Post-Fire")]
    PostFire,
}

impl FirePeriod {
    /// All periods in chronological order
    pub const ALL: [FirePeriod; 3] = [
        FirePeriod::PreFire,
        FirePeriod::DuringFire,
        FirePeriod::PostFire,
    ];

    /// Wire/display name (`"Pre-Fire"`, `"During-Fire"`, `"Post-Fire"`)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FirePeriod::PreFire => "Pre-Fire",
            FirePeriod::DuringFire => "During-Fire",
            FirePeriod::PostFire => "Post-Fire",
        }
    }
}

impl fmt::Display for FirePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column names of the serialized table, in order
pub const TABLE_COLUMNS: [&str; 10] = [
    "lat",
    "lon",
    "anomaly_score",
    "fire_probability",
    "fire_classification",
    "confidence",
    "grid_id",
    "Pre-Fire",
    "During-Fire",
    "Post-Fire",
];

/// One row of the generated detection table
///
/// Serialized field order is the table column order; the three period
/// columns keep their dashed display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Embedding anomaly score, [0, 1]
    pub anomaly_score: Score,
    /// Fire probability, [0, 1]
    pub fire_probability: Score,
    /// Classification derived from `fire_probability`
    pub fire_classification: FireClassification,
    /// Confidence in the assigned classification, [0, 1]
    pub confidence: Score,
    /// Unique `G_{row}_{col}` identifier
    pub grid_id: String,
    /// Anomaly-like score for the pre-event window
    #[serde(rename = "Pre-Fire")]
    pub pre_fire: Score,
    /// Anomaly-like score for the event window (equals `anomaly_score`)
    #[serde(rename = "During-Fire")]
    pub during_fire: Score,
    /// Anomaly-like score for the post-event window
    #[serde(rename = "Post-Fire")]
    pub post_fire: Score,
}

impl GridPoint {
    /// Whether this point is classified as fire
    #[must_use]
    pub fn is_fire(&self) -> bool {
        self.fire_classification == FireClassification::Fire
    }

    /// Score of a named time window
    #[must_use]
    pub fn period_score(&self, period: FirePeriod) -> Score {
        match period {
            FirePeriod::PreFire => self.pre_fire,
            FirePeriod::DuringFire => self.during_fire,
            FirePeriod::PostFire => self.post_fire,
        }
    }

    /// The six score columns in table order
    ///
    /// Order matches [`crate::metrics::SCORE_COLUMNS`]; used by the
    /// correlation view.
    #[must_use]
    pub fn score_vector(&self) -> [f64; 6] {
        [
            *self.anomaly_score,
            *self.fire_probability,
            *self.confidence,
            *self.pre_fire,
            *self.during_fire,
            *self.post_fire,
        ]
    }
}
