//! Aggregate summary metrics over a detection table
//!
//! Pure aggregate reads over a (possibly filtered) table. Ratios over an
//! empty table are defined as zero rather than failing; the dashboard
//! renders these cards for whatever subset the active filter leaves.

use crate::core_types::GridPoint;
use serde::{Deserialize, Serialize};

/// Confidence above which a fire detection counts as high-confidence
pub const HIGH_CONFIDENCE: f64 = 0.8;

/// Headline metrics of a detection table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Number of points classified as fire
    pub fire_count: usize,
    /// Number of points in the table
    pub total_count: usize,
    /// `fire_count / total_count`, 0 when the table is empty
    pub fire_ratio: f64,
    /// Mean anomaly score, 0 when the table is empty
    pub avg_anomaly: f64,
    /// Maximum anomaly score, 0 when the table is empty
    pub max_anomaly: f64,
    /// Fire points with confidence above [`HIGH_CONFIDENCE`]
    pub high_conf_fire: usize,
}

impl MetricsSummary {
    /// Share of fire detections that are high-confidence
    ///
    /// Denominator clamped to >= 1 so an all-filtered table reads as 0.
    #[must_use]
    pub fn high_conf_ratio(&self) -> f64 {
        self.high_conf_fire as f64 / self.fire_count.max(1) as f64
    }
}

/// Compute the summary metrics of a table
#[must_use]
pub fn summarize(points: &[GridPoint]) -> MetricsSummary {
    let total_count = points.len();
    let fire_count = points.iter().filter(|p| p.is_fire()).count();
    let high_conf_fire = points
        .iter()
        .filter(|p| p.is_fire() && *p.confidence > HIGH_CONFIDENCE)
        .count();

    let fire_ratio = if total_count == 0 {
        0.0
    } else {
        fire_count as f64 / total_count as f64
    };

    let avg_anomaly = if total_count == 0 {
        0.0
    } else {
        points.iter().map(|p| *p.anomaly_score).sum::<f64>() / total_count as f64
    };

    let max_anomaly = points
        .iter()
        .map(|p| p.anomaly_score)
        .max()
        .map_or(0.0, |s| *s);

    MetricsSummary {
        fire_count,
        total_count,
        fire_ratio,
        avg_anomaly,
        max_anomaly,
        high_conf_fire,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{FireClassification, Score};
    use approx::assert_relative_eq;

    fn point(anomaly: f64, probability: f64, threshold: f64) -> GridPoint {
        let classification = FireClassification::from_probability(probability, threshold);
        let confidence = if classification == FireClassification::Fire {
            Score::new(probability)
        } else {
            Score::new(1.0 - probability)
        };
        GridPoint {
            lat: 0.0,
            lon: 0.0,
            anomaly_score: Score::new(anomaly),
            fire_probability: Score::new(probability),
            fire_classification: classification,
            confidence,
            grid_id: format!("G_{anomaly}_{probability}"),
            pre_fire: Score::new(anomaly * 0.5),
            during_fire: Score::new(anomaly),
            post_fire: Score::new(anomaly * 0.5),
        }
    }

    #[test]
    fn test_summary_counts_and_ratios() {
        let points = vec![
            point(0.9, 0.9, 0.6),  // fire, high confidence
            point(0.7, 0.65, 0.6), // fire, low confidence
            point(0.2, 0.1, 0.6),  // non-fire
            point(0.4, 0.3, 0.6),  // non-fire
        ];

        let summary = summarize(&points);
        assert_eq!(summary.total_count, 4);
        assert_eq!(summary.fire_count, 2);
        assert_eq!(summary.high_conf_fire, 1);
        assert_relative_eq!(summary.fire_ratio, 0.5);
        assert_relative_eq!(summary.avg_anomaly, 0.55);
        assert_relative_eq!(summary.max_anomaly, 0.9);
        assert_relative_eq!(summary.high_conf_ratio(), 0.5);
    }

    #[test]
    fn test_empty_table_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.fire_count, 0);
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.high_conf_fire, 0);
        assert_relative_eq!(summary.fire_ratio, 0.0);
        assert_relative_eq!(summary.avg_anomaly, 0.0);
        assert_relative_eq!(summary.max_anomaly, 0.0);
        assert_relative_eq!(summary.high_conf_ratio(), 0.0);
    }

    #[test]
    fn test_high_confidence_band_is_strict() {
        // Confidence exactly at the band edge does not count
        let points = vec![point(0.8, 0.8, 0.6)];
        let summary = summarize(&points);
        assert_eq!(summary.fire_count, 1);
        assert_eq!(summary.high_conf_fire, 0);
    }
}
