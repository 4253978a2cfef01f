//! Relative time formatting.

use chrono::{DateTime, Utc};

/// Compact "time ago" label such as `45s ago`, `3m ago`, `2h ago`, `5d ago`.
///
/// Timestamps in the future read as `0s ago`.
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);

    match seconds {
        s if s < 60 => format!("{s}s ago"),
        s if s < 3_600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3_600),
        s => format!("{}d ago", s / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_units() {
        let now = now();
        assert_eq!(format_time_ago(now - Duration::seconds(59), now), "59s ago");
        assert_eq!(format_time_ago(now - Duration::seconds(60), now), "1m ago");
        assert_eq!(format_time_ago(now - Duration::minutes(3), now), "3m ago");
        assert_eq!(format_time_ago(now - Duration::minutes(90), now), "1h ago");
        assert_eq!(format_time_ago(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_time_ago(now - Duration::hours(49), now), "2d ago");
    }

    #[test]
    fn test_future_timestamp() {
        let now = now();
        assert_eq!(format_time_ago(now + Duration::seconds(30), now), "0s ago");
    }
}
