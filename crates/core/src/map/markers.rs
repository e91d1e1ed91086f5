//! Marker styling for individual grid-point map markers
//!
//! Fire detections are banded by confidence into red/orange/yellow
//! markers; non-fire points are green. Band edges are strict `>`
//! comparisons, so a confidence exactly on an edge falls to the band
//! below it.

use crate::core_types::{FireClassification, GridPoint};
use serde::Serialize;

/// Confidence above which a fire marker renders red
const HIGH_CONFIDENCE_BAND: f64 = 0.8;
/// Confidence above which a fire marker renders orange
const MEDIUM_CONFIDENCE_BAND: f64 = 0.6;

/// Marker color and icon for one grid point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    /// Marker color name
    pub color: &'static str,
    /// Font-awesome icon name
    pub icon: &'static str,
}

impl MarkerStyle {
    /// Style for a grid point, from its classification and confidence
    #[must_use]
    pub fn for_point(point: &GridPoint) -> Self {
        match point.fire_classification {
            FireClassification::Fire => {
                if *point.confidence > HIGH_CONFIDENCE_BAND {
                    MarkerStyle {
                        color: "red",
                        icon: "fire",
                    }
                } else if *point.confidence > MEDIUM_CONFIDENCE_BAND {
                    MarkerStyle {
                        color: "orange",
                        icon: "exclamation-triangle",
                    }
                } else {
                    MarkerStyle {
                        color: "yellow",
                        icon: "warning",
                    }
                }
            }
            FireClassification::NonFire => MarkerStyle {
                color: "green",
                icon: "check",
            },
        }
    }
}

/// Hover tooltip text for a grid point
#[must_use]
pub fn tooltip(point: &GridPoint) -> String {
    format!(
        "{}: {} ({:.2})",
        point.grid_id, point.fire_classification, *point.confidence
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Score;

    fn fire_point(confidence: f64) -> GridPoint {
        GridPoint {
            lat: 34.4,
            lon: -119.7,
            anomaly_score: Score::new(0.8),
            fire_probability: Score::new(confidence),
            fire_classification: FireClassification::Fire,
            confidence: Score::new(confidence),
            grid_id: "G_3_4".to_string(),
            pre_fire: Score::new(0.4),
            during_fire: Score::new(0.8),
            post_fire: Score::new(0.4),
        }
    }

    #[test]
    fn test_confidence_bands() {
        assert_eq!(MarkerStyle::for_point(&fire_point(0.95)).color, "red");
        assert_eq!(MarkerStyle::for_point(&fire_point(0.7)).color, "orange");
        assert_eq!(MarkerStyle::for_point(&fire_point(0.61)).color, "orange");
        assert_eq!(MarkerStyle::for_point(&fire_point(0.5)).color, "yellow");
    }

    #[test]
    fn test_band_edges_fall_to_lower_band() {
        assert_eq!(MarkerStyle::for_point(&fire_point(0.8)).color, "orange");
        assert_eq!(MarkerStyle::for_point(&fire_point(0.6)).color, "yellow");
    }

    #[test]
    fn test_non_fire_is_green() {
        let mut point = fire_point(0.9);
        point.fire_classification = FireClassification::NonFire;
        let style = MarkerStyle::for_point(&point);
        assert_eq!(style.color, "green");
        assert_eq!(style.icon, "check");
    }

    #[test]
    fn test_tooltip_format() {
        assert_eq!(tooltip(&fire_point(0.85)), "G_3_4: Fire (0.85)");
    }
}
