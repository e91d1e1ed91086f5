//! Deterministic synthetic detection-grid generator
//!
//! Produces the tabular dataset the dashboard visualizes: a fixed
//! latitude/longitude grid where each point carries an anomaly score
//! decreasing with distance from a configured center, a noisy fire
//! probability derived from it, the resulting classification and
//! confidence, and per-period scores for the synthetic time series.
//!
//! Generation is deterministic given a seed: the same `GridConfig`
//! always produces a bit-identical table, which makes dashboard sessions
//! and tests reproducible. The per-point draw order is fixed (anomaly
//! noise, probability noise, pre-event factor, post-event factor).

use crate::core_types::{FireClassification, GridPoint, Score};
use crate::grid::bounds::GridBounds;
use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration of the synthetic detection grid
///
/// All generator constants live here; none of them are derived. The
/// defaults reproduce the Thomas Fire demo dataset: a 10×10 grid around
/// the fire's center coordinate, seeded at 42.
///
/// # Example
/// ```
/// use fire_detect_core::{generate, GridConfig};
///
/// let table = generate(&GridConfig::default());
/// assert_eq!(table.len(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// RNG seed; the same seed reproduces the same table
    pub seed: u64,
    /// Bounding box sampled by the grid
    pub bounds: GridBounds,
    /// Evenly spaced samples per axis (grid is `resolution`²)
    pub resolution: usize,
    /// Center coordinate the anomaly falloff is measured from (lat, lon)
    pub center: Point2<f64>,
    /// Anomaly falloff per degree of distance from the center
    pub distance_falloff: f64,
    /// Std deviation of the zero-mean Gaussian noise on the anomaly score
    pub anomaly_noise_std: f64,
    /// Std deviation of the zero-mean Gaussian noise on the fire probability
    pub probability_noise_std: f64,
    /// Probability above which a point classifies as fire (strict `>`)
    pub fire_threshold: f64,
    /// Lower bound of the uniform pre/post period scale factor
    pub period_scale_min: f64,
    /// Upper bound of the uniform pre/post period scale factor
    pub period_scale_max: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            seed: 42,
            bounds: GridBounds::default(),
            resolution: 10,
            // Thomas Fire center coordinate
            center: Point2::new(34.4208, -119.6982),
            distance_falloff: 10.0,
            anomaly_noise_std: 0.1,
            probability_noise_std: 0.15,
            fire_threshold: 0.6,
            period_scale_min: 0.3,
            period_scale_max: 0.7,
        }
    }
}

impl GridConfig {
    /// Number of points the generated table will contain
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Check the configuration invariants. Asserts on violation.
    ///
    /// Called by [`generate`]; kept public so callers constructing configs
    /// from external input can fail early.
    #[track_caller]
    pub fn validate(&self) {
        assert!(self.resolution >= 2, "GridConfig: resolution must be >= 2");
        assert!(
            self.anomaly_noise_std >= 0.0 && self.anomaly_noise_std.is_finite(),
            "GridConfig: anomaly noise std must be finite and non-negative"
        );
        assert!(
            self.probability_noise_std >= 0.0 && self.probability_noise_std.is_finite(),
            "GridConfig: probability noise std must be finite and non-negative"
        );
        assert!(
            self.period_scale_min <= self.period_scale_max,
            "GridConfig: period scale range is inverted"
        );
    }
}

/// Generate the detection table described by `config`
///
/// Pure and total over validated configurations: every score field of the
/// result lies in [0, 1], `grid_id` values are unique, and two calls with
/// the same configuration return bit-identical tables.
#[must_use]
pub fn generate(config: &GridConfig) -> Vec<GridPoint> {
    config.validate();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let anomaly_noise = Normal::new(0.0, config.anomaly_noise_std)
        .expect("noise std validated as finite and non-negative");
    let probability_noise = Normal::new(0.0, config.probability_noise_std)
        .expect("noise std validated as finite and non-negative");

    let lats = config.bounds.lat_steps(config.resolution);
    let lons = config.bounds.lon_steps(config.resolution);

    let mut points = Vec::with_capacity(config.point_count());
    for (i, &lat) in lats.iter().enumerate() {
        for (j, &lon) in lons.iter().enumerate() {
            // Anomaly decays linearly with distance from the fire center,
            // in coordinate-degree units
            let distance = nalgebra::distance(&Point2::new(lat, lon), &config.center);
            let base_anomaly = (1.0 - distance * config.distance_falloff).max(0.0);
            let anomaly_score = Score::clamped(base_anomaly + anomaly_noise.sample(&mut rng));

            let fire_probability =
                Score::clamped(*anomaly_score + probability_noise.sample(&mut rng));
            let fire_classification =
                FireClassification::from_probability(*fire_probability, config.fire_threshold);
            let confidence = match fire_classification {
                FireClassification::Fire => fire_probability,
                FireClassification::NonFire => fire_probability.complement(),
            };

            // The event window reuses the anomaly score unchanged; the
            // surrounding windows are scaled down by an independent factor
            let pre_fire = scaled_period_score(&mut rng, anomaly_score, config);
            let during_fire = anomaly_score;
            let post_fire = scaled_period_score(&mut rng, anomaly_score, config);

            points.push(GridPoint {
                lat,
                lon,
                anomaly_score,
                fire_probability,
                fire_classification,
                confidence,
                grid_id: format!("G_{i}_{j}"),
                pre_fire,
                during_fire,
                post_fire,
            });
        }
    }

    debug!(
        seed = config.seed,
        points = points.len(),
        "generated detection grid"
    );

    points
}

/// Anomaly score scaled by a uniform factor for a non-event period
fn scaled_period_score(rng: &mut StdRng, anomaly: Score, config: &GridConfig) -> Score {
    let factor = if config.period_scale_min < config.period_scale_max {
        rng.random_range(config.period_scale_min..config.period_scale_max)
    } else {
        config.period_scale_min
    };
    Score::clamped(*anomaly * factor)
}
