//! # Quakemap Map
//!
//! Presents the composed layers as a single self-contained Leaflet page:
//! three selectable base maps, the "Earthquakes" and "Fault Lines"
//! overlays, a layer control and a magnitude legend in the bottom-right
//! corner. The initial view is centered on (31.51073, 0.0) at zoom 2.3.

mod basemap;
mod document;
mod error;
mod legend;

pub use basemap::{BaseMap, TileLayer};
pub use document::{render_html, write_html, MapOptions};
pub use error::{MapError, Result};
pub use legend::legend_html;
