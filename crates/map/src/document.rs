//! Self-contained HTML map document.
//!
//! The document embeds both overlays, the base tile layers and the legend as
//! one JSON object consumed by a small Leaflet script. Rendering performs no
//! network access.

use std::path::Path;

use quakemap_colormap::Palette;
use quakemap_layers::{escape_html, CircleMarker, LineLayer, PointLayer, Polyline};
use serde::Serialize;
use tracing::info;

use crate::basemap::{BaseMap, TileLayer};
use crate::error::{MapError, Result};
use crate::legend::legend_html;

const TEMPLATE: &str = include_str!("map.html");

/// Parameters for the rendered map.
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Page title.
    pub title: String,
    /// Initial view center as (lat, lon).
    pub center: (f64, f64),
    pub zoom: f64,
    /// Tile provider access token.
    pub access_token: Option<String>,
    /// Base maps offered in the layer control; the first is shown initially.
    pub base_maps: Vec<BaseMap>,
    /// Palette the legend describes. Must match the one used for markers.
    pub palette: Palette,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            title: "Earthquakes and Plate Boundaries".to_string(),
            center: (31.51073, 0.0),
            zoom: 2.3,
            access_token: None,
            base_maps: BaseMap::ALL.to_vec(),
            palette: Palette::default(),
        }
    }
}

impl MapOptions {
    fn validate(&self) -> Result<&str> {
        let token = self
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(MapError::MissingAccessToken)?;

        let (lat, lon) = self.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(MapError::InvalidParameter {
                name: "center",
                value: format!("{lat}, {lon}"),
                reason: "latitude must be within ±90 and longitude within ±180".into(),
            });
        }
        if !(0.0..=18.0).contains(&self.zoom) {
            return Err(MapError::InvalidParameter {
                name: "zoom",
                value: self.zoom.to_string(),
                reason: "must be between 0 and 18".into(),
            });
        }
        if self.base_maps.is_empty() {
            return Err(MapError::InvalidParameter {
                name: "base_maps",
                value: "[]".into(),
                reason: "at least one base map is required".into(),
            });
        }
        Ok(token)
    }
}

// ─── Page data ─────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageData<'a> {
    center: [f64; 2],
    zoom: f64,
    access_token: &'a str,
    base_layers: Vec<TileLayer>,
    points: PointLayerView<'a>,
    lines: LineLayerView<'a>,
    legend: String,
}

#[derive(Serialize)]
struct PointLayerView<'a> {
    name: &'a str,
    markers: Vec<MarkerView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkerView {
    lat: f64,
    lon: f64,
    radius: f64,
    fill_color: String,
    fill_opacity: f64,
    color: String,
    weight: f64,
    severity: &'static str,
    popup: String,
}

impl From<&CircleMarker> for MarkerView {
    fn from(m: &CircleMarker) -> Self {
        Self {
            lat: m.center.y(),
            lon: m.center.x(),
            radius: m.radius,
            fill_color: m.style.fill_color.to_hex(),
            fill_opacity: m.style.fill_opacity,
            color: m.style.color.to_hex(),
            weight: m.style.weight,
            severity: m.severity.name(),
            popup: m.popup.html(),
        }
    }
}

#[derive(Serialize)]
struct LineLayerView<'a> {
    name: &'a str,
    lines: Vec<LineView<'a>>,
}

#[derive(Serialize)]
struct LineView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    /// Leaflet order: [lat, lon].
    latlngs: Vec<[f64; 2]>,
    color: String,
    weight: f64,
    opacity: f64,
}

impl<'a> From<&'a Polyline> for LineView<'a> {
    fn from(l: &'a Polyline) -> Self {
        Self {
            name: l.name.as_deref(),
            latlngs: l.path.coords().map(|c| [c.y, c.x]).collect(),
            color: l.style.color.to_hex(),
            weight: l.style.weight,
            opacity: l.style.opacity,
        }
    }
}

// ─── Rendering ─────────────────────────────────────────────────────────

/// Render the HTML document for the two overlays.
pub fn render_html(points: &PointLayer, lines: &LineLayer, options: &MapOptions) -> Result<String> {
    let token = options.validate()?;

    let data = PageData {
        center: [options.center.0, options.center.1],
        zoom: options.zoom,
        access_token: token,
        base_layers: options.base_maps.iter().map(BaseMap::tile_layer).collect(),
        points: PointLayerView {
            name: &points.name,
            markers: points.markers.iter().map(MarkerView::from).collect(),
        },
        lines: LineLayerView {
            name: &lines.name,
            lines: lines.lines.iter().map(LineView::from).collect(),
        },
        legend: legend_html(options.palette),
    };

    let json = script_safe(&serde_json::to_string(&data)?);

    Ok(fill_template(&escape_html(&options.title), &json))
}

/// Fill the placeholders in template order with a single pass, so inserted
/// text is never scanned for placeholders again.
fn fill_template(title: &str, data: &str) -> String {
    let mut out = String::with_capacity(TEMPLATE.len() + title.len() + data.len());
    let mut rest = TEMPLATE;
    for (marker, value) in [("__TITLE__", title), ("__DATA__", data)] {
        if let Some((head, tail)) = rest.split_once(marker) {
            out.push_str(head);
            out.push_str(value);
            rest = tail;
        }
    }
    out.push_str(rest);
    out
}

/// Render and write the document to `path`.
pub fn write_html(
    points: &PointLayer,
    lines: &LineLayer,
    options: &MapOptions,
    path: &Path,
) -> Result<()> {
    let html = render_html(points, lines, options)?;
    std::fs::write(path, html)?;
    info!(path = %path.display(), markers = points.len(), lines = lines.len(), "map written");
    Ok(())
}

/// Keep embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
