//! Validated map features: earthquake events and plate boundary segments.

use chrono::{DateTime, Utc};
use geo_types::{Coord, LineString, Point};

use crate::error::{Error, Result};
use crate::geojson::{RawBoundary, RawEvent};
use crate::magnitude::Magnitude;
use crate::time::millis_to_utc;

/// Place text used when a feed omits it.
pub const UNKNOWN_PLACE: &str = "Unknown location";

/// A single earthquake, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SeismicEvent {
    /// Epicenter as (lon, lat).
    pub location: Point<f64>,
    pub magnitude: Magnitude,
    pub place: String,
    /// Origin time, if the feed reported one.
    pub time: Option<DateTime<Utc>>,
    /// Feed-assigned identifier
    pub id: Option<String>,
}

impl SeismicEvent {
    pub fn new(lon: f64, lat: f64, magnitude: Magnitude, place: impl Into<String>) -> Self {
        Self {
            location: Point::new(lon, lat),
            magnitude,
            place: place.into(),
            time: None,
            id: None,
        }
    }

    /// Set the origin time from feed milliseconds.
    pub fn with_time_millis(mut self, millis: i64) -> Self {
        self.time = millis_to_utc(millis);
        self
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }
}

impl TryFrom<RawEvent> for SeismicEvent {
    type Error = Error;

    /// Requires finite coordinates and a finite magnitude; place and time are optional.
    fn try_from(raw: RawEvent) -> Result<Self> {
        let geometry = raw
            .geometry
            .ok_or_else(|| Error::InvalidFeature("missing geometry".into()))?;
        let coord = coord_from(&geometry.coordinates)?;

        let mag = raw
            .properties
            .mag
            .ok_or_else(|| Error::InvalidFeature("missing magnitude".into()))?;
        let magnitude = Magnitude::new(mag)?;

        Ok(Self {
            location: Point::from(coord),
            magnitude,
            place: raw
                .properties
                .place
                .unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            time: raw.properties.time.and_then(millis_to_utc),
            id: raw.id,
        })
    }
}

/// One tectonic plate edge.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySegment {
    /// Boundary name, e.g. `AF-AN`.
    pub name: Option<String>,
    /// Vertices in feed order.
    pub line: LineString<f64>,
}

impl BoundarySegment {
    /// Build a segment from `(lon, lat)` pairs. At least two vertices are required.
    pub fn from_vertices(vertices: &[(f64, f64)]) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(Error::InvalidFeature(format!(
                "boundary needs at least 2 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self {
            name: None,
            line: LineString::from(vertices.to_vec()),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.line.0.len()
    }

    /// Vertices as (lon, lat), in order.
    pub fn vertices(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.line.coords().map(|c| (c.x, c.y))
    }
}

impl TryFrom<RawBoundary> for BoundarySegment {
    type Error = Error;

    fn try_from(raw: RawBoundary) -> Result<Self> {
        let geometry = raw
            .geometry
            .ok_or_else(|| Error::InvalidFeature("missing geometry".into()))?;
        if let Some(kind) = geometry.type_.as_deref() {
            if kind != "LineString" {
                return Err(Error::InvalidFeature(format!(
                    "unsupported boundary geometry {kind}"
                )));
            }
        }

        let coords = geometry
            .coordinates
            .iter()
            .map(|c| coord_from(c))
            .collect::<Result<Vec<Coord<f64>>>>()?;
        if coords.len() < 2 {
            return Err(Error::InvalidFeature(format!(
                "boundary needs at least 2 vertices, got {}",
                coords.len()
            )));
        }

        Ok(Self {
            name: raw.properties.name,
            line: LineString::new(coords),
        })
    }
}

/// Read `[lon, lat, ...]`; extra ordinates such as depth are ignored.
fn coord_from(values: &[f64]) -> Result<Coord<f64>> {
    match values {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Ok(Coord { x: *lon, y: *lat }),
        [_, _, ..] => Err(Error::InvalidFeature("non-finite coordinate".into())),
        _ => Err(Error::InvalidFeature(format!(
            "expected [lon, lat], got {} value(s)",
            values.len()
        ))),
    }
}
