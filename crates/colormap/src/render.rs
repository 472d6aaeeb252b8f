//! Magnitude-to-marker encoding: radius and fill color.

use crate::scheme::{classify, Palette, Rgb, SeverityBand};
use quakemap_core::Magnitude;

/// Metres of circle radius per unit of magnitude.
pub const RADIUS_SCALE: f64 = 35_000.0;

/// Raw linear radius: `magnitude * RADIUS_SCALE`.
///
/// Radius follows raw magnitude, not released energy. Negative magnitudes
/// give negative radii; [`EncodeParams::radius`] clamps before rendering.
pub fn encode_radius(magnitude: Magnitude) -> f64 {
    magnitude.value() * RADIUS_SCALE
}

/// Parameters for marker encoding.
#[derive(Debug, Clone)]
pub struct EncodeParams {
    /// Palette used for fill colors.
    pub palette: Palette,
    /// Metres per unit of magnitude.
    pub scale: f64,
    /// Smallest radius handed to the renderer, in metres.
    pub min_radius: f64,
}

impl EncodeParams {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            scale: RADIUS_SCALE,
            min_radius: 0.0,
        }
    }

    /// Set the radius floor. Negative and non-finite floors are treated as 0.
    pub fn with_min_radius(mut self, min_radius: f64) -> Self {
        self.min_radius = if min_radius.is_finite() {
            min_radius.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Render radius: the linear radius clamped to `min_radius`.
    pub fn radius(&self, magnitude: Magnitude) -> f64 {
        (magnitude.value() * self.scale).max(self.min_radius)
    }

    /// Band for a magnitude under this palette.
    pub fn band(&self, magnitude: Magnitude) -> &'static SeverityBand {
        classify(self.palette, magnitude)
    }

    pub fn color(&self, magnitude: Magnitude) -> Rgb {
        self.band(magnitude).color
    }
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

/// One legend row: `(threshold, color, label)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub threshold: f64,
    pub color: Rgb,
    pub label: &'static str,
    /// Severity class name, for styling.
    pub class: &'static str,
}

/// Legend rows for a palette, lowest band first.
pub fn legend(palette: Palette) -> Vec<LegendEntry> {
    palette
        .bands()
        .iter()
        .map(|band| LegendEntry {
            threshold: band.threshold(),
            color: band.color,
            label: band.label,
            class: band.severity.name(),
        })
        .collect()
}
