//! Pearson correlation matrix over the score columns
//!
//! Backs the dashboard's correlation view: pairwise correlations between
//! the six score columns of the table. Degenerate columns (zero variance,
//! including the empty table) correlate as 0 rather than NaN so the view
//! never has to special-case missing data.

use crate::core_types::GridPoint;
use serde::{Deserialize, Serialize};

/// The score columns of the table, in matrix order
pub const SCORE_COLUMNS: [&str; 6] = [
    "anomaly_score",
    "fire_probability",
    "confidence",
    "Pre-Fire",
    "During-Fire",
    "Post-Fire",
];

/// Symmetric 6×6 correlation matrix over [`SCORE_COLUMNS`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    values: [[f64; 6]; 6],
}

impl CorrelationMatrix {
    /// Column labels, in row/column order
    #[must_use]
    pub fn labels() -> &'static [&'static str; 6] {
        &SCORE_COLUMNS
    }

    /// Correlation between columns `row` and `col`
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// Row-major view of the matrix
    #[must_use]
    pub fn rows(&self) -> &[[f64; 6]; 6] {
        &self.values
    }
}

/// Compute the Pearson correlation matrix of a table
#[must_use]
pub fn correlation_matrix(points: &[GridPoint]) -> CorrelationMatrix {
    let columns: Vec<[f64; 6]> = points.iter().map(GridPoint::score_vector).collect();

    let mut values = [[0.0; 6]; 6];
    for row in 0..6 {
        for col in row..6 {
            let r = pearson(
                columns.iter().map(|v| v[row]),
                columns.iter().map(|v| v[col]),
                columns.len(),
            );
            values[row][col] = r;
            values[col][row] = r;
        }
    }

    CorrelationMatrix { values }
}

/// Pearson correlation of two equally long samples; 0 when degenerate
fn pearson(
    xs: impl Iterator<Item = f64> + Clone,
    ys: impl Iterator<Item = f64> + Clone,
    n: usize,
) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n_f = n as f64;
    let mean_x = xs.clone().sum::<f64>() / n_f;
    let mean_y = ys.clone().sum::<f64>() / n_f;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        cov / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{generate, GridConfig};
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_diagonal_and_symmetry() {
        let points = generate(&GridConfig::default());
        let matrix = correlation_matrix(&points);

        for i in 0..6 {
            assert_relative_eq!(matrix.get(i, i), 1.0, epsilon = 1e-9);
            for j in 0..6 {
                assert_relative_eq!(matrix.get(i, j), matrix.get(j, i), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_event_window_tracks_anomaly_exactly() {
        // During-Fire is a copy of the anomaly column, so their
        // correlation is exactly 1
        let points = generate(&GridConfig::default());
        let matrix = correlation_matrix(&points);
        assert_relative_eq!(matrix.get(0, 4), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_table_yields_zero_matrix() {
        let matrix = correlation_matrix(&[]);
        for i in 0..6 {
            for j in 0..6 {
                assert_relative_eq!(matrix.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn test_degenerate_column_yields_zero() {
        // Noise silenced and falloff removed: every anomaly score is
        // identical, so the anomaly column has zero variance
        let config = GridConfig {
            distance_falloff: 0.0,
            anomaly_noise_std: 0.0,
            ..GridConfig::default()
        };
        let matrix = correlation_matrix(&generate(&config));
        assert_relative_eq!(matrix.get(0, 0), 0.0);
        assert_relative_eq!(matrix.get(0, 1), 0.0);
    }

    #[test]
    fn test_labels_match_column_order() {
        assert_eq!(CorrelationMatrix::labels()[0], "anomaly_score");
        assert_eq!(CorrelationMatrix::labels()[4], "During-Fire");
    }
}
