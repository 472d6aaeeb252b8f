//! Feed timestamp helpers.

use chrono::{DateTime, Utc};

/// Convert milliseconds since the Unix epoch to a UTC datetime.
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}

/// Format a datetime for display in popups, e.g. `11/14/2023, 10:13:20 PM UTC`.
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%-m/%-d/%Y, %-I:%M:%S %p UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_millis_roundtrip() {
        let dt = millis_to_utc(1_700_000_000_000).unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
    }

    #[test]
    fn formats_twelve_hour_clock() {
        let dt = millis_to_utc(1_700_000_000_000).unwrap();
        assert_eq!(format_utc(&dt), "11/14/2023, 10:13:20 PM UTC");
    }

    #[test]
    fn out_of_range_is_none() {
        assert!(millis_to_utc(i64::MAX).is_none());
    }
}
