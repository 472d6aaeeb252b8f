//! Magnitude severity bands and palettes.
//!
//! The classifier is an ordered table of half-open magnitude intervals. Each
//! table starts at -inf and ends at +inf with contiguous bounds, so every
//! finite magnitude lands in exactly one band.

use std::fmt;

use quakemap_core::Magnitude;

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#64C8FA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Severity classes, one per band, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Micro,
    Minor,
    Light,
    Moderate,
    Strong,
    Major,
    Great,
    Extreme,
}

impl Severity {
    /// Lower-case name, used as the legend CSS class.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Minor => "minor",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::Major => "major",
            Self::Great => "great",
            Self::Extreme => "extreme",
        }
    }
}

/// One half-open band `[lower, upper)` of the magnitude partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityBand {
    /// Inclusive lower bound; `-inf` for the first band.
    pub lower: f64,
    /// Exclusive upper bound; `+inf` for the last band.
    pub upper: f64,
    pub severity: Severity,
    pub color: Rgb,
    pub label: &'static str,
}

impl SeverityBand {
    const fn new(lower: f64, upper: f64, severity: Severity, color: Rgb, label: &'static str) -> Self {
        Self {
            lower,
            upper,
            severity,
            color,
            label,
        }
    }

    /// Whether `m` lies in `[lower, upper)`.
    pub fn contains(&self, m: f64) -> bool {
        m >= self.lower && m < self.upper
    }

    /// Legend threshold: the lower bound, or 0 for the open-ended first band.
    pub fn threshold(&self) -> f64 {
        if self.lower.is_finite() {
            self.lower
        } else {
            0.0
        }
    }
}

/// Available palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    /// The published USGS-style colors. `[6,7)` and `7+` share maroon.
    #[default]
    Reference,
    /// Same as `Reference` but `7+` gets its own indigo.
    Distinct,
}

impl Palette {
    pub const ALL: &'static [Palette] = &[Self::Reference, Self::Distinct];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Distinct => "distinct",
        }
    }

    /// Parse a palette name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reference" | "ref" | "usgs" => Some(Self::Reference),
            "distinct" => Some(Self::Distinct),
            _ => None,
        }
    }

    /// The ordered band table.
    pub fn bands(&self) -> &'static [SeverityBand] {
        match self {
            Self::Reference => REFERENCE_BANDS,
            Self::Distinct => DISTINCT_BANDS,
        }
    }

    /// Unique colors used by this palette, in band order.
    pub fn colors(&self) -> Vec<Rgb> {
        let mut out: Vec<Rgb> = Vec::with_capacity(self.bands().len());
        for band in self.bands() {
            if !out.contains(&band.color) {
                out.push(band.color);
            }
        }
        out
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Band tables ───────────────────────────────────────────────────────

const MAROON: Rgb = Rgb::new(0x80, 0x00, 0x00);
const INDIGO: Rgb = Rgb::new(0x4B, 0x00, 0x82);

const REFERENCE_BANDS: &[SeverityBand] = &[
    SeverityBand::new(f64::NEG_INFINITY, 1.0, Severity::Micro, Rgb::new(0x64, 0xC8, 0xFA), "< 1"),
    SeverityBand::new(1.0, 2.0, Severity::Minor, Rgb::new(0x00, 0x64, 0xC8), "1\u{2013}2"),
    SeverityBand::new(2.0, 3.0, Severity::Light, Rgb::new(0x00, 0x80, 0x00), "2\u{2013}3"),
    SeverityBand::new(3.0, 4.0, Severity::Moderate, Rgb::new(0xFF, 0xFF, 0x00), "3\u{2013}4"),
    SeverityBand::new(4.0, 5.0, Severity::Strong, Rgb::new(0xFF, 0xA5, 0x00), "4\u{2013}5"),
    SeverityBand::new(5.0, 6.0, Severity::Major, Rgb::new(0xFF, 0x00, 0x00), "5\u{2013}6"),
    SeverityBand::new(6.0, 7.0, Severity::Great, MAROON, "6\u{2013}7"),
    SeverityBand::new(7.0, f64::INFINITY, Severity::Extreme, MAROON, "7+"),
];

const DISTINCT_BANDS: &[SeverityBand] = &[
    REFERENCE_BANDS[0],
    REFERENCE_BANDS[1],
    REFERENCE_BANDS[2],
    REFERENCE_BANDS[3],
    REFERENCE_BANDS[4],
    REFERENCE_BANDS[5],
    REFERENCE_BANDS[6],
    SeverityBand::new(7.0, f64::INFINITY, Severity::Extreme, INDIGO, "7+"),
];

// ─── Classification ────────────────────────────────────────────────────

/// Classify a magnitude: the first band whose upper bound exceeds it.
pub fn classify(palette: Palette, magnitude: Magnitude) -> &'static SeverityBand {
    let m = magnitude.value();
    let bands = palette.bands();
    bands
        .iter()
        .find(|band| m < band.upper)
        .unwrap_or(&bands[bands.len() - 1])
}

/// Fill color for a magnitude.
pub fn magnitude_color(palette: Palette, magnitude: Magnitude) -> Rgb {
    classify(palette, magnitude).color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mag(v: f64) -> Magnitude {
        Magnitude::new(v).unwrap()
    }

    #[test]
    fn tables_partition_the_real_line() {
        for &palette in Palette::ALL {
            let bands = palette.bands();
            assert_eq!(bands.len(), 8);
            assert_eq!(bands[0].lower, f64::NEG_INFINITY);
            assert_eq!(bands[bands.len() - 1].upper, f64::INFINITY);
            for pair in bands.windows(2) {
                assert_eq!(pair[0].upper, pair[1].lower);
                assert!(pair[0].severity < pair[1].severity);
            }
        }
    }

    #[test]
    fn boundaries_belong_to_upper_band() {
        let bands = Palette::Reference.bands();
        for i in 1..=7 {
            let band = classify(Palette::Reference, mag(i as f64));
            assert_eq!(band, &bands[i], "magnitude {i}");
        }
        assert_eq!(classify(Palette::Reference, mag(0.0)), &bands[0]);
    }

    #[test]
    fn negative_magnitudes_are_micro() {
        let band = classify(Palette::Reference, mag(-1.3));
        assert_eq!(band.severity, Severity::Micro);
        assert_eq!(band.color.to_hex(), "#64C8FA");
    }

    #[test]
    fn reference_colors() {
        let hex: Vec<String> = Palette::Reference
            .bands()
            .iter()
            .map(|b| b.color.to_hex())
            .collect();
        assert_eq!(
            hex,
            vec!["#64C8FA", "#0064C8", "#008000", "#FFFF00", "#FFA500", "#FF0000", "#800000", "#800000"]
        );
    }

    #[test]
    fn reference_has_seven_colors_distinct_has_eight() {
        assert_eq!(Palette::Reference.colors().len(), 7);
        assert_eq!(Palette::Distinct.colors().len(), 8);
    }

    #[test]
    fn palettes_differ_only_at_terminal_band() {
        let a = mag(6.5);
        let b = mag(7.2);
        assert_eq!(magnitude_color(Palette::Reference, a), magnitude_color(Palette::Reference, b));
        assert_ne!(magnitude_color(Palette::Distinct, a), magnitude_color(Palette::Distinct, b));
        assert_eq!(magnitude_color(Palette::Distinct, b).to_hex(), "#4B0082");
    }

    #[test]
    fn labels() {
        assert_eq!(classify(Palette::Reference, mag(2.5)).label, "2\u{2013}3");
        assert_eq!(classify(Palette::Reference, mag(9.1)).label, "7+");
        assert_eq!(classify(Palette::Reference, mag(0.2)).label, "< 1");
    }

    #[test]
    fn hex_notation() {
        assert_eq!(Rgb::new(0xCC, 0x00, 0x33).to_hex(), "#CC0033");
        assert_eq!(Rgb::new(100, 200, 250).to_string(), "#64C8FA");
    }

    #[test]
    fn palette_names() {
        assert_eq!(Palette::from_name("Reference"), Some(Palette::Reference));
        assert_eq!(Palette::from_name("distinct"), Some(Palette::Distinct));
        assert_eq!(Palette::from_name("rainbow"), None);
    }
}
