//! Table filtering for the dashboard sidebar controls
//!
//! A filter narrows the table by a minimum anomaly threshold and a set of
//! allowed classifications. Filtering is a pure function: it returns a
//! new table and never touches the source, so the full table and any
//! number of filtered views can coexist within a session.

use crate::core_types::{FireClassification, GridPoint};
use serde::{Deserialize, Serialize};

/// Sidebar filter settings
///
/// The default passes everything: zero threshold, both classifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Minimum anomaly score, inclusive
    pub min_anomaly: f64,
    /// Classifications to keep; a point must match one of these
    pub classifications: Vec<FireClassification>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            min_anomaly: 0.0,
            classifications: FireClassification::ALL.to_vec(),
        }
    }
}

impl FilterCriteria {
    /// Keep only points classified as fire above the given threshold
    #[must_use]
    pub fn fire_only(min_anomaly: f64) -> Self {
        FilterCriteria {
            min_anomaly,
            classifications: vec![FireClassification::Fire],
        }
    }

    /// Whether a point passes both predicates
    #[must_use]
    pub fn matches(&self, point: &GridPoint) -> bool {
        *point.anomaly_score >= self.min_anomaly
            && self.classifications.contains(&point.fire_classification)
    }

    /// Return the subset of `points` passing the filter
    ///
    /// Idempotent: applying the same criteria to its own output returns
    /// an equal table.
    #[must_use]
    pub fn apply(&self, points: &[GridPoint]) -> Vec<GridPoint> {
        points.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}
