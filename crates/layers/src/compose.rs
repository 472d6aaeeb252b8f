//! Feature-to-layer composition.
//!
//! Turns the two fetched documents into a point layer and a line layer.
//! Composition only reads its inputs, so running it twice on the same
//! documents yields equal layers.

use quakemap_colormap::EncodeParams;
use quakemap_core::geojson::{RawBoundary, RawEvent};
use quakemap_core::{BoundarySegment, FeatureCollection, SeismicEvent};
use tracing::{debug, warn};

use crate::layer::{CircleMarker, CircleStyle, LineLayer, PathStyle, PointLayer, Polyline, Popup};

/// Parameters controlling composition.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Marker radius and color encoding.
    pub encode: EncodeParams,
    /// Style shared by every boundary line.
    pub boundary_style: PathStyle,
}

impl ComposeOptions {
    pub fn new(encode: EncodeParams) -> Self {
        Self {
            encode,
            boundary_style: PathStyle::FAULT,
        }
    }
}

/// How many features made it onto each layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeReport {
    pub events_rendered: usize,
    pub events_skipped: usize,
    pub boundaries_rendered: usize,
    pub boundaries_skipped: usize,
}

impl ComposeReport {
    pub fn skipped(&self) -> usize {
        self.events_skipped + self.boundaries_skipped
    }
}

/// Output of [`compose`].
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub points: PointLayer,
    pub lines: LineLayer,
    pub report: ComposeReport,
}

/// Build both layers from the fetched documents.
///
/// Features missing a magnitude or coordinates, with a non-finite magnitude,
/// or with fewer than two boundary vertices are skipped with a warning.
pub fn compose(
    events: &FeatureCollection,
    boundaries: &FeatureCollection,
    options: &ComposeOptions,
) -> Composition {
    let mut report = ComposeReport::default();

    let markers: Vec<CircleMarker> = valid_events(events)
        .iter()
        .map(|event| event_marker(event, &options.encode))
        .collect();
    report.events_rendered = markers.len();
    report.events_skipped = events.len() - markers.len();

    let lines: Vec<Polyline> = boundaries
        .decode::<RawBoundary>()
        .enumerate()
        .filter_map(|(index, raw)| {
            match raw.and_then(BoundarySegment::try_from) {
                Ok(segment) => Some(boundary_line(&segment, options.boundary_style)),
                Err(e) => {
                    warn!(index, error = %e, "skipping boundary feature");
                    None
                }
            }
        })
        .collect();
    report.boundaries_rendered = lines.len();
    report.boundaries_skipped = boundaries.len() - lines.len();

    debug!(?report, "layers composed");

    Composition {
        points: PointLayer::new(markers),
        lines: LineLayer::new(lines),
        report,
    }
}

/// Compose already-validated features.
pub fn compose_features(
    events: &[SeismicEvent],
    boundaries: &[BoundarySegment],
    options: &ComposeOptions,
) -> (PointLayer, LineLayer) {
    let markers = events
        .iter()
        .map(|e| event_marker(e, &options.encode))
        .collect();
    let lines = boundaries
        .iter()
        .map(|b| boundary_line(b, options.boundary_style))
        .collect();
    (PointLayer::new(markers), LineLayer::new(lines))
}

/// Circle marker for one event: clamped radius, band color, popup.
pub fn event_marker(event: &SeismicEvent, encode: &EncodeParams) -> CircleMarker {
    let band = encode.band(event.magnitude);
    CircleMarker {
        center: event.location,
        radius: encode.radius(event.magnitude),
        severity: band.severity,
        style: CircleStyle::filled(band.color),
        popup: Popup {
            place: event.place.clone(),
            time: event.time,
            magnitude: event.magnitude,
        },
    }
}

/// Polyline for one boundary, vertices in feed order.
pub fn boundary_line(segment: &BoundarySegment, style: PathStyle) -> Polyline {
    Polyline {
        name: segment.name.clone(),
        path: segment.line.clone(),
        style,
    }
}

/// Decode every valid event from a document in feed order, skipping invalid
/// features with a warning.
pub fn valid_events(events: &FeatureCollection) -> Vec<SeismicEvent> {
    events
        .decode::<RawEvent>()
        .enumerate()
        .filter_map(|(index, raw)| match raw.and_then(SeismicEvent::try_from) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(index, error = %e, "skipping earthquake feature");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakemap_colormap::{Palette, Severity, RADIUS_SCALE};

    fn collection(features: &str) -> FeatureCollection {
        let doc = format!(r#"{{"type": "FeatureCollection", "features": [{features}]}}"#);
        FeatureCollection::from_slice(doc.as_bytes()).unwrap()
    }

    fn event(mag: &str, coords: &str) -> String {
        format!(
            r#"{{"type": "Feature", "geometry": {{"type": "Point", "coordinates": {coords}}},
                "properties": {{"mag": {mag}, "place": "Test City", "time": 1700000000000}}}}"#
        )
    }

    #[test]
    fn single_event_scenario() {
        let events = collection(&event("2.5", "[-122.4, 37.8]"));
        let out = compose(&events, &FeatureCollection::empty(), &ComposeOptions::default());

        assert_eq!(out.points.len(), 1);
        let m = &out.points.markers[0];
        assert_eq!(m.center.x(), -122.4);
        assert_eq!(m.center.y(), 37.8);
        assert_eq!(m.radius, 2.5 * RADIUS_SCALE);
        assert_eq!(m.severity, Severity::Light);
        assert_eq!(m.style.fill_color.to_hex(), "#008000");
        assert!(m.popup.html().contains("Test City"));
        assert!(m.popup.html().contains("Magnitude: 2.5"));
    }

    #[test]
    fn negative_magnitude_is_clamped() {
        let events = collection(&event("-0.5", "[0.0, 0.0]"));

        let out = compose(&events, &FeatureCollection::empty(), &ComposeOptions::default());
        assert_eq!(out.points.markers[0].radius, 0.0);

        let opts = ComposeOptions::new(EncodeParams::default().with_min_radius(2_000.0));
        let out = compose(&events, &FeatureCollection::empty(), &opts);
        assert_eq!(out.points.markers[0].radius, 2_000.0);
    }

    #[test]
    fn malformed_features_are_skipped() {
        let features = [
            event("1.5", "[10.0, 10.0]"),
            event("null", "[10.0, 10.0]"),
            event("3.0", "[]"),
            r#"{"type": "Feature", "properties": {"mag": 4.0}}"#.to_string(),
            event("\"strong\"", "[1.0, 1.0]"),
            event("5.5", "[20.0, 20.0]"),
        ]
        .join(",");
        let events = collection(&features);

        let out = compose(&events, &FeatureCollection::empty(), &ComposeOptions::default());
        assert_eq!(out.report.events_rendered, 2);
        assert_eq!(out.report.events_skipped, 4);
        let mags: Vec<f64> = out
            .points
            .markers
            .iter()
            .map(|m| m.popup.magnitude.value())
            .collect();
        assert_eq!(mags, vec![1.5, 5.5]);
    }

    #[test]
    fn ill_typed_time_still_renders() {
        let events = collection(
            r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]},
                "properties": {"mag": 3.2, "place": "Ridge", "time": 1.7e12}}"#,
        );
        let out = compose(&events, &FeatureCollection::empty(), &ComposeOptions::default());

        assert_eq!(out.report.events_rendered, 1);
        assert_eq!(out.report.events_skipped, 0);
        let html = out.points.markers[0].popup.html();
        assert!(html.contains("<h3>Ridge</h3>"));
        assert!(html.contains("Date: unknown"));
        assert!(html.contains("Magnitude: 3.2"));
    }

    #[test]
    fn valid_events_skips_like_compose() {
        let events = collection(&[event("1.5", "[0.0, 0.0]"), event("null", "[0.0, 0.0]")].join(","));
        let valid = valid_events(&events);
        let out = compose(&events, &FeatureCollection::empty(), &ComposeOptions::default());

        assert_eq!(valid.len(), out.report.events_rendered);
        assert_eq!(events.len() - valid.len(), out.report.events_skipped);
    }

    #[test]
    fn boundary_vertices_preserved() {
        let boundaries = collection(
            r#"{"type": "Feature", "properties": {"Name": "T"},
                "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1], [2, 0]]}},
               {"type": "Feature", "properties": {},
                "geometry": {"type": "LineString", "coordinates": [[5, 5]]}}"#,
        );
        let out = compose(&FeatureCollection::empty(), &boundaries, &ComposeOptions::default());

        assert_eq!(out.lines.len(), 1);
        assert_eq!(out.report.boundaries_skipped, 1);
        let line = &out.lines.lines[0];
        assert_eq!(line.vertex_count(), 3);
        let v: Vec<(f64, f64)> = line.path.coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(v, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        assert_eq!(line.style, PathStyle::FAULT);
    }

    #[test]
    fn compose_is_idempotent_and_pure() {
        let events = collection(&[event("2.5", "[1.0, 2.0]"), event("6.1", "[3.0, 4.0]")].join(","));
        let boundaries = collection(
            r#"{"geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}, "properties": {}}"#,
        );
        let before = (events.features.clone(), boundaries.features.clone());

        let opts = ComposeOptions::default();
        let a = compose(&events, &boundaries, &opts);
        let b = compose(&events, &boundaries, &opts);

        assert_eq!(a, b);
        assert_eq!(before, (events.features, boundaries.features));
    }

    #[test]
    fn distinct_palette_changes_only_great_events() {
        let events = collection(&[event("6.5", "[0.0, 0.0]"), event("7.5", "[0.0, 0.0]")].join(","));
        let reference = compose(&events, &FeatureCollection::empty(), &ComposeOptions::default());
        let distinct = compose(
            &events,
            &FeatureCollection::empty(),
            &ComposeOptions::new(EncodeParams::new(Palette::Distinct)),
        );

        let fill = |c: &Composition, i: usize| c.points.markers[i].style.fill_color;
        assert_eq!(fill(&reference, 0), fill(&reference, 1));
        assert_eq!(fill(&reference, 0), fill(&distinct, 0));
        assert_ne!(fill(&distinct, 0), fill(&distinct, 1));
    }

    #[test]
    fn compose_features_matches_compose() {
        let events = collection(&event("4.2", "[9.0, 45.0]"));
        let opts = ComposeOptions::default();

        let valid = valid_events(&events);
        let segment = BoundarySegment::from_vertices(&[(0.0, 0.0), (1.0, 0.0)]).unwrap();
        let (points, lines) = compose_features(&valid, &[segment], &opts);

        let composed = compose(&events, &FeatureCollection::empty(), &opts);
        assert_eq!(points, composed.points);
        assert_eq!(lines.len(), 1);
    }
}
