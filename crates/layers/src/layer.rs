//! Renderable shapes and the two map layers.

use chrono::{DateTime, Utc};
use geo_types::{LineString, Point};
use quakemap_colormap::{Rgb, Severity};
use quakemap_core::time::format_utc;
use quakemap_core::Magnitude;

/// Name of the earthquake overlay.
pub const EARTHQUAKES_LAYER: &str = "Earthquakes";
/// Name of the plate-boundary overlay.
pub const FAULT_LINES_LAYER: &str = "Fault Lines";

// ─── Styles ────────────────────────────────────────────────────────────

/// Fill and stroke of a circle marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStyle {
    pub fill_color: Rgb,
    pub fill_opacity: f64,
    /// Stroke color.
    pub color: Rgb,
    /// Stroke width in pixels.
    pub weight: f64,
}

impl CircleStyle {
    /// Default marker look with the given fill.
    pub const fn filled(fill_color: Rgb) -> Self {
        Self {
            fill_color,
            fill_opacity: 0.85,
            color: Rgb::new(0, 0, 0),
            weight: 0.65,
        }
    }
}

/// Stroke of a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub color: Rgb,
    /// Stroke width in pixels.
    pub weight: f64,
    pub opacity: f64,
}

impl PathStyle {
    /// Lava red used for plate boundaries.
    pub const FAULT: Self = Self {
        color: Rgb::new(0xCC, 0x00, 0x33),
        weight: 6.0,
        opacity: 0.6,
    };
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::FAULT
    }
}

// ─── Shapes ────────────────────────────────────────────────────────────

/// Text shown when an earthquake marker is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub place: String,
    pub time: Option<DateTime<Utc>>,
    pub magnitude: Magnitude,
}

impl Popup {
    /// HTML body: place heading, then date and magnitude.
    pub fn html(&self) -> String {
        let date = self
            .time
            .as_ref()
            .map(format_utc)
            .unwrap_or_else(|| "unknown".to_string());
        format!(
            "<h3>{}</h3><hr>Date: {}<br>Magnitude: {}",
            escape_html(&self.place),
            date,
            self.magnitude
        )
    }
}

/// A geographic circle whose radius is in metres.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    /// Center as (lon, lat).
    pub center: Point<f64>,
    pub radius: f64,
    pub severity: Severity,
    pub style: CircleStyle,
    pub popup: Popup,
}

/// A styled path through ordered (lon, lat) vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub name: Option<String>,
    pub path: LineString<f64>,
    pub style: PathStyle,
}

impl Polyline {
    pub fn vertex_count(&self) -> usize {
        self.path.0.len()
    }
}

// ─── Layers ────────────────────────────────────────────────────────────

/// Independently toggleable group of earthquake markers.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLayer {
    pub name: String,
    pub markers: Vec<CircleMarker>,
}

impl PointLayer {
    pub fn new(markers: Vec<CircleMarker>) -> Self {
        Self {
            name: EARTHQUAKES_LAYER.to_string(),
            markers,
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Independently toggleable group of boundary lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayer {
    pub name: String,
    pub lines: Vec<Polyline>,
}

impl LineLayer {
    pub fn new(lines: Vec<Polyline>) -> Self {
        Self {
            name: FAULT_LINES_LAYER.to_string(),
            lines,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Escape text for inclusion in HTML element content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
