//! Base tile layers (Mapbox raster styles).

use serde::Serialize;

const MAPBOX_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, \
<a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, Imagery &copy; <a href=\"https://www.mapbox.com/\">Mapbox</a>";

const MAPBOX_TILE_URL: &str =
    "https://api.mapbox.com/styles/v1/mapbox/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";

/// Selectable base maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseMap {
    Streets,
    Satellite,
    Terrain,
}

impl BaseMap {
    /// All base maps, in layer-control order.
    pub const ALL: &'static [BaseMap] = &[Self::Streets, Self::Satellite, Self::Terrain];

    /// Label shown in the layer control.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Streets => "Streets",
            Self::Satellite => "Satellite",
            Self::Terrain => "Terrain",
        }
    }

    /// Mapbox style id.
    pub fn style_id(&self) -> &'static str {
        match self {
            Self::Streets => "streets-v12",
            Self::Satellite => "satellite-v9",
            Self::Terrain => "outdoors-v12",
        }
    }

    /// Tile layer definition for this base map.
    pub fn tile_layer(&self) -> TileLayer {
        TileLayer {
            name: self.name(),
            url: MAPBOX_TILE_URL,
            id: self.style_id(),
            attribution: MAPBOX_ATTRIBUTION,
            max_zoom: 18,
            tile_size: 512,
            zoom_offset: -1,
        }
    }
}

/// A raster tile layer as the page script consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub name: &'static str,
    /// URL template with `{id}`, `{z}`, `{x}`, `{y}`, `{accessToken}`.
    pub url: &'static str,
    pub id: &'static str,
    pub attribution: &'static str,
    pub max_zoom: u8,
    pub tile_size: u16,
    pub zoom_offset: i8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_base_maps() {
        let names: Vec<&str> = BaseMap::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["Streets", "Satellite", "Terrain"]);
    }

    #[test]
    fn tile_layer_template() {
        let t = BaseMap::Satellite.tile_layer();
        assert_eq!(t.id, "satellite-v9");
        assert_eq!(t.max_zoom, 18);
        assert!(t.url.contains("{accessToken}"));
        assert!(t.attribution.contains("OpenStreetMap"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(BaseMap::Streets.tile_layer()).unwrap();
        assert_eq!(json["maxZoom"], 18);
        assert_eq!(json["zoomOffset"], -1);
    }
}
