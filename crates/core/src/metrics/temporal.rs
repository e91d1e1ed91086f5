//! Temporal change profile across the three time windows
//!
//! Backs the dashboard's time-series chart: the mean period score per
//! (period, classification) group. Groups are emitted in fixed order
//! (periods chronologically, fire before non-fire) so chart series line
//! up run to run. Empty groups report a zero mean with a zero count.

use crate::core_types::{FireClassification, FirePeriod, GridPoint};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Mean period score of one (period, classification) group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemporalEntry {
    /// Time window of this group
    pub period: FirePeriod,
    /// Classification of this group
    pub classification: FireClassification,
    /// Mean period score, 0 when the group is empty
    pub mean_score: f64,
    /// Number of points in the group
    pub count: usize,
}

/// Compute the temporal profile of a table
///
/// Returns `FirePeriod::ALL.len() * FireClassification::ALL.len()` entries
/// in fixed order.
#[must_use]
pub fn temporal_profile(points: &[GridPoint]) -> Vec<TemporalEntry> {
    let mut groups: FxHashMap<(FirePeriod, FireClassification), (f64, usize)> =
        FxHashMap::default();

    for point in points {
        for period in FirePeriod::ALL {
            let entry = groups
                .entry((period, point.fire_classification))
                .or_insert((0.0, 0));
            entry.0 += *point.period_score(period);
            entry.1 += 1;
        }
    }

    let mut profile = Vec::with_capacity(FirePeriod::ALL.len() * FireClassification::ALL.len());
    for period in FirePeriod::ALL {
        for classification in FireClassification::ALL {
            let (sum, count) = groups
                .get(&(period, classification))
                .copied()
                .unwrap_or((0.0, 0));
            let mean_score = if count == 0 { 0.0 } else { sum / count as f64 };
            profile.push(TemporalEntry {
                period,
                classification,
                mean_score,
                count,
            });
        }
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{generate, GridConfig};
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_group_order() {
        let profile = temporal_profile(&generate(&GridConfig::default()));
        assert_eq!(profile.len(), 6);
        assert_eq!(profile[0].period, FirePeriod::PreFire);
        assert_eq!(profile[0].classification, FireClassification::Fire);
        assert_eq!(profile[5].period, FirePeriod::PostFire);
        assert_eq!(profile[5].classification, FireClassification::NonFire);
    }

    #[test]
    fn test_event_window_mean_equals_anomaly_mean() {
        let points = generate(&GridConfig::default());
        let profile = temporal_profile(&points);

        for classification in FireClassification::ALL {
            let subset: Vec<&GridPoint> = points
                .iter()
                .filter(|p| p.fire_classification == classification)
                .collect();
            let expected = if subset.is_empty() {
                0.0
            } else {
                subset.iter().map(|p| *p.anomaly_score).sum::<f64>() / subset.len() as f64
            };

            let entry = profile
                .iter()
                .find(|e| {
                    e.period == FirePeriod::DuringFire && e.classification == classification
                })
                .expect("group exists");
            assert_relative_eq!(entry.mean_score, expected, epsilon = 1e-12);
            assert_eq!(entry.count, subset.len());
        }
    }

    #[test]
    fn test_empty_table_reports_zero_groups() {
        let profile = temporal_profile(&[]);
        assert_eq!(profile.len(), 6);
        for entry in profile {
            assert_eq!(entry.count, 0);
            assert_relative_eq!(entry.mean_score, 0.0);
        }
    }
}
