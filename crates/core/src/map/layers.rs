//! Heat-layer preparation for the map view
//!
//! The map renders one selectable metric as a heat overlay. This module
//! maps the metric choice to its per-row value, colormap name, and display
//! label, and flattens a table into the `[lat, lon, intensity]` triples
//! the heat-layer widget consumes.

use crate::core_types::GridPoint;
use serde::{Deserialize, Serialize};

/// Metric selectable for the map heat layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapMetric {
    /// Embedding anomaly score
    AnomalyScore,
    /// Fire probability
    FireProbability,
    /// Classification confidence
    Confidence,
}

impl MapMetric {
    /// All selectable metrics, in sidebar order
    pub const ALL: [MapMetric; 3] = [
        MapMetric::AnomalyScore,
        MapMetric::FireProbability,
        MapMetric::Confidence,
    ];

    /// Colormap name for the heat layer
    #[must_use]
    pub fn colormap(self) -> &'static str {
        match self {
            MapMetric::AnomalyScore => "YlOrRd",
            MapMetric::FireProbability => "Reds",
            MapMetric::Confidence => "viridis",
        }
    }

    /// Display label for popups and the layer control
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MapMetric::AnomalyScore => "Anomaly Score",
            MapMetric::FireProbability => "Fire Probability",
            MapMetric::Confidence => "Confidence",
        }
    }

    /// Value of this metric for one row
    #[must_use]
    pub fn value(self, point: &GridPoint) -> f64 {
        match self {
            MapMetric::AnomalyScore => *point.anomaly_score,
            MapMetric::FireProbability => *point.fire_probability,
            MapMetric::Confidence => *point.confidence,
        }
    }
}

/// `[lat, lon, intensity]` triples for the heat-layer widget
#[must_use]
pub fn heat_layer(points: &[GridPoint], metric: MapMetric) -> Vec<[f64; 3]> {
    points
        .iter()
        .map(|p| [p.lat, p.lon, metric.value(p)])
        .collect()
}
