//! Derived analytics over a detection table

pub mod correlation;
pub mod summary;
pub mod temporal;

pub use correlation::{correlation_matrix, CorrelationMatrix, SCORE_COLUMNS};
pub use summary::{summarize, MetricsSummary, HIGH_CONFIDENCE};
pub use temporal::{temporal_profile, TemporalEntry};
