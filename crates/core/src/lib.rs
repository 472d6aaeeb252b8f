//! # Quakemap Core
//!
//! Core types and feed parsing for the quakemap earthquake map.
//!
//! This crate provides:
//! - [`Magnitude`]: a finite seismic magnitude
//! - [`SeismicEvent`] and [`BoundarySegment`]: validated features
//! - [`FeatureCollection`]: the raw GeoJSON document as fetched
//! - UTC timestamp helpers for feed times

pub mod error;
pub mod geojson;
pub mod magnitude;
pub mod time;
pub mod vector;

pub use error::{Error, Result};
pub use geojson::FeatureCollection;
pub use magnitude::Magnitude;
pub use vector::{BoundarySegment, SeismicEvent};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geojson::FeatureCollection;
    pub use crate::magnitude::Magnitude;
    pub use crate::vector::{BoundarySegment, SeismicEvent};
}
