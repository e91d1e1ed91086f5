//! Fire Detection Dashboard Core Library
//!
//! Data and metrics core of a fire-detection visualization dashboard.
//! Generates a deterministic synthetic detection table over a fixed
//! latitude/longitude grid: anomaly scores falling off with distance
//! from a configured fire center, plus derived classification,
//! confidence, and per-period time-series scores. On top of the table
//! it provides the derived views the dashboard widgets consume:
//!
//! - Summary metrics (fire counts, ratios, anomaly statistics)
//! - Pearson correlation matrix over the score columns
//! - Temporal profile of mean period scores per classification
//! - Threshold/classification filtering as pure table views
//! - Map-layer preparation: heat-layer triples, marker styling,
//!   popup/legend markup
//! - CSV export and JSON session snapshots
//!
//! All generation is seeded: a session's configuration fully determines
//! its table, so results are reproducible run to run.

// Core types and utilities
pub mod core_types;

// Detection table generation
pub mod grid;

// Derived analytics
pub mod metrics;

// Table filtering and presentation-facing preparation
pub mod filter;
pub mod map;

// Export and session state
pub mod export;
pub mod session;

// Re-export core types
pub use core_types::{FireClassification, FirePeriod, GridPoint, Score, TABLE_COLUMNS};

// Re-export generation types
pub use grid::{generate, GridBounds, GridConfig};

// Re-export analytics types
pub use metrics::{
    correlation_matrix, summarize, temporal_profile, CorrelationMatrix, MetricsSummary,
    TemporalEntry, HIGH_CONFIDENCE, SCORE_COLUMNS,
};

// Re-export presentation-facing types
pub use filter::FilterCriteria;
pub use map::{heat_layer, legend_html, popup_html, tooltip, MapMetric, MarkerStyle};

// Re-export export and session types
pub use export::{export_filename, load_snapshot, save_snapshot, to_csv_string, write_csv, ExportError};
pub use session::DetectionSession;
