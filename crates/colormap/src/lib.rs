//! # Quakemap Colormap
//!
//! Magnitude classification and marker encoding for quakemap.
//!
//! Magnitudes are classified against an ordered table of half-open bands
//! ([`Palette::bands`]); each band carries a fill color and a legend label.
//! Marker radius grows linearly with magnitude ([`encode_radius`]).
//!
//! ## Usage
//!
//! ```
//! use quakemap_colormap::{classify, encode_radius, Palette, RADIUS_SCALE};
//! use quakemap_core::Magnitude;
//!
//! let m = Magnitude::new(2.5).unwrap();
//! assert_eq!(classify(Palette::Reference, m).label, "2\u{2013}3");
//! assert_eq!(encode_radius(m), 2.5 * RADIUS_SCALE);
//! ```

mod render;
mod scheme;

pub use render::{encode_radius, legend, EncodeParams, LegendEntry, RADIUS_SCALE};
pub use scheme::{classify, magnitude_color, Palette, Rgb, Severity, SeverityBand};
