//! Feed endpoints and loader options.
//!
//! Earthquakes come from the USGS real-time summary feeds; plate boundaries
//! default to the PB2002 model published as GeoJSON.

use std::time::Duration;

/// Base URL of the USGS GeoJSON summary feeds.
pub const USGS_SUMMARY_BASE: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// PB2002 plate boundaries (Bird, 2003) as a GeoJSON FeatureCollection.
pub const PB2002_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

// ---------------------------------------------------------------------------
// Event feeds
// ---------------------------------------------------------------------------

/// USGS summary windows plus custom endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventFeed {
    /// All earthquakes, past hour.
    PastHour,
    /// All earthquakes, past day.
    PastDay,
    /// All earthquakes, past 7 days.
    #[default]
    PastWeek,
    /// All earthquakes, past 30 days.
    PastMonth,
    /// Any URL returning a GeoJSON FeatureCollection of events.
    Custom(String),
}

impl EventFeed {
    /// Full GET URL for this feed.
    pub fn url(&self) -> String {
        match self {
            Self::PastHour => format!("{USGS_SUMMARY_BASE}/all_hour.geojson"),
            Self::PastDay => format!("{USGS_SUMMARY_BASE}/all_day.geojson"),
            Self::PastWeek => format!("{USGS_SUMMARY_BASE}/all_week.geojson"),
            Self::PastMonth => format!("{USGS_SUMMARY_BASE}/all_month.geojson"),
            Self::Custom(url) => url.clone(),
        }
    }

    /// Parse a shorthand string into a feed.
    ///
    /// Recognized shorthands: `"hour"`, `"day"`, `"week"`, `"month"` (and
    /// their `all_*` spellings). Anything else is treated as a custom URL.
    pub fn from_str_or_url(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hour" | "all_hour" => Self::PastHour,
            "day" | "all_day" => Self::PastDay,
            "week" | "all_week" => Self::PastWeek,
            "month" | "all_month" => Self::PastMonth,
            _ => Self::Custom(s.to_string()),
        }
    }

    /// Short description for logs and page titles.
    pub fn describe(&self) -> &str {
        match self {
            Self::PastHour => "past hour",
            Self::PastDay => "past day",
            Self::PastWeek => "past 7 days",
            Self::PastMonth => "past 30 days",
            Self::Custom(url) => url,
        }
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for [`DatasetLoader`](crate::DatasetLoader).
#[derive(Debug, Clone)]
pub struct FeedOptions {
    /// Earthquake feed (default: past week).
    pub events: EventFeed,
    /// Plate-boundary document URL (default: PB2002).
    pub boundaries_url: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            events: EventFeed::default(),
            boundaries_url: PB2002_BOUNDARIES_URL.to_string(),
            request_timeout: None,
            user_agent: concat!("quakemap/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_urls() {
        assert_eq!(
            EventFeed::PastWeek.url(),
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson"
        );
        assert_eq!(
            EventFeed::PastMonth.url(),
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson"
        );
        assert_eq!(
            EventFeed::Custom("https://example.com/q.json".into()).url(),
            "https://example.com/q.json"
        );
    }

    #[test]
    fn from_str_or_url() {
        assert_eq!(EventFeed::from_str_or_url("day"), EventFeed::PastDay);
        assert_eq!(EventFeed::from_str_or_url("ALL_MONTH"), EventFeed::PastMonth);
        assert!(matches!(
            EventFeed::from_str_or_url("https://example.com/feed.geojson"),
            EventFeed::Custom(_)
        ));
    }

    #[test]
    fn default_options() {
        let opts = FeedOptions::default();
        assert_eq!(opts.events, EventFeed::PastWeek);
        assert_eq!(opts.boundaries_url, PB2002_BOUNDARIES_URL);
        assert!(opts.request_timeout.is_none());
        assert!(opts.user_agent.starts_with("quakemap/"));
    }
}
