//! Presentation-facing map preparation
//!
//! Pure helpers the map widget consumes: heat-layer triples, marker
//! styling, and popup/legend markup. Nothing here mutates the table.

pub mod layers;
pub mod markers;
pub mod popup;

pub use layers::{heat_layer, MapMetric};
pub use markers::{tooltip, MarkerStyle};
pub use popup::{legend_html, popup_html};
