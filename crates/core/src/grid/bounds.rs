//! Geographic bounding box and evenly spaced axis sampling

use serde::{Deserialize, Serialize};

/// Latitude/longitude bounding box of the analysis grid
///
/// The generator samples `resolution` evenly spaced values per axis,
/// endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Southern edge (degrees latitude)
    pub lat_min: f64,
    /// Northern edge (degrees latitude)
    pub lat_max: f64,
    /// Western edge (degrees longitude)
    pub lon_min: f64,
    /// Eastern edge (degrees longitude)
    pub lon_max: f64,
}

impl GridBounds {
    /// Create a bounding box. Asserts min < max on both axes.
    #[must_use]
    #[track_caller]
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        assert!(lat_min < lat_max, "GridBounds: lat_min must be below lat_max");
        assert!(lon_min < lon_max, "GridBounds: lon_min must be below lon_max");
        GridBounds {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// Evenly spaced latitude values, endpoints included
    #[must_use]
    pub fn lat_steps(&self, resolution: usize) -> Vec<f64> {
        linspace(self.lat_min, self.lat_max, resolution)
    }

    /// Evenly spaced longitude values, endpoints included
    #[must_use]
    pub fn lon_steps(&self, resolution: usize) -> Vec<f64> {
        linspace(self.lon_min, self.lon_max, resolution)
    }
}

impl Default for GridBounds {
    /// Thomas Fire analysis region (Ventura County, CA)
    fn default() -> Self {
        GridBounds {
            lat_min: 34.35,
            lat_max: 34.50,
            lon_min: -119.8,
            lon_max: -119.6,
        }
    }
}

/// `n` evenly spaced values over `[min, max]`, endpoints included
///
/// Requires `n >= 2`; the grid needs at least both endpoints per axis.
fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    assert!(n >= 2, "linspace needs at least two samples");
    let step = (max - min) / (n - 1) as f64;
    (0..n).map(|i| min + step * i as f64).collect()
}
