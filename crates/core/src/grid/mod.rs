//! Detection grid: bounding box and synthetic table generation

pub mod bounds;
pub mod generator;

pub use bounds::GridBounds;
pub use generator::{generate, GridConfig};
