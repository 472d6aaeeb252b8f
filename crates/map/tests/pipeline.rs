//! End-to-end: in-memory feeds through composition to the HTML document.

use quakemap_colormap::{EncodeParams, Palette, RADIUS_SCALE};
use quakemap_feeds::{Canned, DatasetLoader, EventFeed, FeedOptions, MemorySource};
use quakemap_layers::{compose, ComposeOptions};
use quakemap_map::{render_html, MapOptions};
use std::time::Duration;

const EVENTS: &str = include_str!("../../feeds/tests/fixtures/events.geojson");
const BOUNDARIES: &str = include_str!("../../feeds/tests/fixtures/boundaries.json");

fn options() -> FeedOptions {
    FeedOptions {
        events: EventFeed::Custom("mem://events".to_string()),
        boundaries_url: "mem://boundaries".to_string(),
        ..FeedOptions::default()
    }
}

fn map_options(palette: Palette) -> MapOptions {
    MapOptions {
        access_token: Some("pk.test".to_string()),
        palette,
        ..MapOptions::default()
    }
}

#[tokio::test]
async fn feeds_to_document() {
    let source = MemorySource::new()
        .with_body("mem://events", EVENTS)
        .with_body("mem://boundaries", BOUNDARIES);
    let data = DatasetLoader::with_source(source, &options())
        .load()
        .await
        .expect("load failed");

    let out = compose(&data.events, &data.boundaries, &ComposeOptions::default());
    assert_eq!(out.report.events_rendered, 3);
    assert_eq!(out.report.events_skipped, 1);
    assert_eq!(out.report.boundaries_rendered, 2);

    let first = &out.points.markers[0];
    assert_eq!(first.radius, 2.5 * RADIUS_SCALE);
    assert_eq!(out.points.markers[1].radius, 0.0);

    let html = render_html(&out.points, &out.lines, &map_options(Palette::Reference)).unwrap();
    assert!(html.contains("Test City"));
    assert!(html.contains("\"Fault Lines\""));
    assert!(html.contains("11/14/2023, 10:13:20 PM UTC"));
    assert!(!html.contains("#4B0082"));
}

#[tokio::test]
async fn distinct_palette_reaches_markers_and_legend() {
    let source = MemorySource::new()
        .with_body("mem://events", EVENTS)
        .with_body("mem://boundaries", BOUNDARIES);
    let data = DatasetLoader::with_source(source, &options()).load().await.unwrap();

    let opts = ComposeOptions::new(EncodeParams::new(Palette::Distinct));
    let out = compose(&data.events, &data.boundaries, &opts);
    let html = render_html(&out.points, &out.lines, &map_options(Palette::Distinct)).unwrap();

    // marker fill for the M7.1 event plus the legend swatch
    assert_eq!(html.matches("#4B0082").count(), 2);
}

#[tokio::test]
async fn failed_feed_produces_no_document() {
    let source = MemorySource::new()
        .with_body("mem://events", EVENTS)
        .with_reply("mem://boundaries", Canned::Unreachable, Duration::ZERO);
    let result = DatasetLoader::with_source(source, &options()).load().await;

    assert!(result.is_err());
}
