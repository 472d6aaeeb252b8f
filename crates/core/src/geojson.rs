//! GeoJSON feed documents.
//!
//! Lightweight serde models for the two feeds: USGS earthquake summaries and
//! the PB2002 plate-boundary collection. The document envelope is parsed
//! strictly; individual features are kept as raw JSON and decoded one at a
//! time so that a single bad feature cannot invalidate the whole feed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Document envelope
// ---------------------------------------------------------------------------

/// A GeoJSON FeatureCollection as fetched from a feed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,

    /// Features, still undecoded.
    pub features: Vec<serde_json::Value>,

    /// USGS feeds carry a `metadata` block describing the summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FeedMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
}

impl FeatureCollection {
    /// Parse a document from raw bytes.
    ///
    /// Fails with [`Error::MalformedDocument`] if the body is not JSON, does
    /// not have a `features` array, or is not typed `FeatureCollection`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let col: FeatureCollection = serde_json::from_slice(bytes)
            .map_err(|e| Error::MalformedDocument(format!("parsing feature collection: {e}")))?;
        if col.type_ != "FeatureCollection" {
            return Err(Error::MalformedDocument(format!(
                "expected type FeatureCollection, got {:?}",
                col.type_
            )));
        }
        Ok(col)
    }

    /// Empty collection.
    pub fn empty() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
            metadata: None,
            bbox: None,
        }
    }

    /// Number of features in the document, valid or not.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Decode each feature into `T`, yielding per-feature results in document order.
    pub fn decode<T: DeserializeOwned>(&self) -> impl Iterator<Item = Result<T>> + '_ {
        self.features.iter().map(|f| {
            T::deserialize(f).map_err(|e| Error::InvalidFeature(e.to_string()))
        })
    }
}

/// The `metadata` block of a USGS summary feed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeedMetadata {
    /// Generation time, milliseconds since epoch.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub generated: Option<i64>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

// ---------------------------------------------------------------------------
// Earthquake features
// ---------------------------------------------------------------------------

/// One earthquake feature, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,

    #[serde(default)]
    pub geometry: Option<PointGeometry>,

    #[serde(default)]
    pub properties: EventProperties,
}

/// `Point` geometry: `[lon, lat]` or `[lon, lat, depth_km]`.
#[derive(Debug, Clone, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,

    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// USGS event properties used by the map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventProperties {
    /// Decoded strictly: an ill-typed magnitude makes the feature invalid.
    pub mag: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub place: Option<String>,
    /// Origin time, milliseconds since epoch.
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    /// Event type, usually `"earthquake"`.
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
}

// ---------------------------------------------------------------------------
// Plate boundary features
// ---------------------------------------------------------------------------

/// One plate-boundary feature, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBoundary {
    #[serde(default)]
    pub geometry: Option<LineGeometry>,

    #[serde(default)]
    pub properties: BoundaryProperties,
}

/// `LineString` geometry: ordered `[lon, lat]` vertices.
#[derive(Debug, Clone, Deserialize)]
pub struct LineGeometry {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,

    #[serde(default)]
    pub coordinates: Vec<Vec<f64>>,
}

/// PB2002 boundary properties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundaryProperties {
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(rename = "PlateA", default, deserialize_with = "lenient")]
    pub plate_a: Option<String>,
    #[serde(rename = "PlateB", default, deserialize_with = "lenient")]
    pub plate_b: Option<String>,
    /// Boundary type code, e.g. `"subduction"`.
    #[serde(rename = "Type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
}

/// Decode an optional descriptive field, treating a value of the wrong type
/// as absent.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}
