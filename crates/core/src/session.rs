//! Dashboard session owning the generated detection table
//!
//! One `DetectionSession` backs one dashboard session: it generates the
//! table from an explicit configuration (and seed) at construction, owns
//! it for the session's lifetime, and hands out read access, pure
//! filtered views, metrics, and exports. There is no hidden global state;
//! reproducing a session means reusing its configuration.

use crate::core_types::GridPoint;
use crate::export::{self, ExportError};
use crate::filter::FilterCriteria;
use crate::grid::{generate, GridConfig};
use crate::metrics::{
    correlation_matrix, summarize, temporal_profile, CorrelationMatrix, MetricsSummary,
    TemporalEntry,
};
use std::path::Path;
use tracing::info;

/// A dashboard session: configuration plus the table generated from it
#[derive(Debug, Clone)]
pub struct DetectionSession {
    config: GridConfig,
    points: Vec<GridPoint>,
}

impl DetectionSession {
    /// Generate a new session from a configuration
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        let points = generate(&config);
        let fire_count = points.iter().filter(|p| p.is_fire()).count();
        info!(
            seed = config.seed,
            points = points.len(),
            fire_count,
            "detection session ready"
        );

        DetectionSession { config, points }
    }

    /// The session's configuration
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The full generated table
    #[must_use]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// A filtered copy of the table; the session's table is untouched
    #[must_use]
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<GridPoint> {
        criteria.apply(&self.points)
    }

    /// Summary metrics over the full table
    #[must_use]
    pub fn metrics(&self) -> MetricsSummary {
        summarize(&self.points)
    }

    /// Correlation matrix over the full table
    #[must_use]
    pub fn correlation(&self) -> CorrelationMatrix {
        correlation_matrix(&self.points)
    }

    /// Temporal profile over the full table
    #[must_use]
    pub fn temporal_profile(&self) -> Vec<TemporalEntry> {
        temporal_profile(&self.points)
    }

    /// CSV of the full table
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_csv(&self) -> Result<String, ExportError> {
        export::to_csv_string(&self.points)
    }

    /// Save the table as a JSON snapshot
    ///
    /// # Errors
    /// Returns an error if the table cannot be serialized or written
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        export::save_snapshot(&self.points, path)
    }
}

impl Default for DetectionSession {
    /// Session over the default Thomas Fire configuration
    fn default() -> Self {
        DetectionSession::new(GridConfig::default())
    }
}
