//! # Quakemap Layers
//!
//! Builds the two overlays of the earthquake map from fetched feed documents:
//! a point layer of magnitude-encoded circle markers and a line layer of
//! plate boundaries.
//!
//! ```ignore
//! use quakemap_layers::{compose, ComposeOptions};
//!
//! let out = compose(&data.events, &data.boundaries, &ComposeOptions::default());
//! println!("{} markers, {} lines", out.points.len(), out.lines.len());
//! ```

mod compose;
mod layer;

pub use compose::{
    boundary_line, compose, compose_features, event_marker, valid_events, ComposeOptions,
    ComposeReport, Composition,
};
pub use layer::{
    escape_html, CircleMarker, CircleStyle, LineLayer, PathStyle, PointLayer, Polyline, Popup,
    EARTHQUAKES_LAYER, FAULT_LINES_LAYER,
};
