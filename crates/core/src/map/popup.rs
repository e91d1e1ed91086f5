//! Popup and legend markup templating
//!
//! Markup fragments are produced by pure functions over a row's fields,
//! keeping presentation strings out of the data and metrics logic. The
//! fragments match what the map widget embeds: a fixed-width popup card
//! per marker and one static legend block.

use crate::core_types::{FirePeriod, GridPoint};
use std::fmt::Write as _;

/// Popup card markup for one grid point
///
/// Scores render with 3 decimals, coordinates with 4.
#[must_use]
pub fn popup_html(point: &GridPoint) -> String {
    let mut html = String::with_capacity(512);

    let _ = write!(
        html,
        "<div style=\"width: 200px;\">\
         <h4>{id}</h4>\
         <b>Classification:</b> {classification}<br>\
         <b>Confidence:</b> {confidence:.3}<br>\
         <b>Anomaly Score:</b> {anomaly:.3}<br>\
         <b>Fire Probability:</b> {probability:.3}<br>\
         <b>Coordinates:</b> ({lat:.4}, {lon:.4})<br>\
         <hr>\
         <b>Temporal Scores:</b><br>",
        id = point.grid_id,
        classification = point.fire_classification,
        confidence = *point.confidence,
        anomaly = *point.anomaly_score,
        probability = *point.fire_probability,
        lat = point.lat,
        lon = point.lon,
    );

    for period in FirePeriod::ALL {
        let _ = write!(
            html,
            "&bull; {name}: {score:.3}<br>",
            name = period,
            score = *point.period_score(period),
        );
    }
    html.push_str("</div>");

    html
}

/// Static legend block naming the four marker classes
#[must_use]
pub fn legend_html() -> &'static str {
    "<div style=\"position: fixed; bottom: 50px; left: 50px; width: 200px; height: 120px; \
     background-color: white; border: 2px solid grey; z-index: 9999; \
     font-size: 14px; padding: 10px\">\
     <p><b>Fire Classification Legend</b></p>\
     <p><i class=\"fa fa-circle\" style=\"color:red\"></i> High Confidence Fire</p>\
     <p><i class=\"fa fa-circle\" style=\"color:orange\"></i> Medium Confidence Fire</p>\
     <p><i class=\"fa fa-circle\" style=\"color:yellow\"></i> Low Confidence Fire</p>\
     <p><i class=\"fa fa-circle\" style=\"color:green\"></i> Non-Fire</p>\
     </div>"
}
