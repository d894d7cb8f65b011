use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Placeholder shown for an absent or unreadable date
pub const NO_DATE: &str = "—";

/// Accepts RFC 3339 as well as the zone-less forms SQLite produces, which are
/// read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
}

/// Milliseconds since the epoch; missing or unparseable timestamps count as 0.
pub fn timestamp_millis(raw: Option<&str>) -> i64 {
    raw.and_then(parse_timestamp)
        .map(|ts| ts.timestamp_millis())
        .unwrap_or(0)
}

/// Buckets an age in whole seconds into the largest unit that fits.
pub fn age_label(seconds: i64) -> String {
    let days = seconds / DAY;
    if seconds >= YEAR {
        format!("{}y ago", days / 365)
    } else if seconds >= MONTH {
        format!("{}mo ago", days / 30)
    } else if seconds >= WEEK {
        format!("{}w ago", days / 7)
    } else if seconds >= DAY {
        format!("{days}d ago")
    } else if seconds >= HOUR {
        format!("{}h ago", seconds / HOUR)
    } else if seconds >= MINUTE {
        format!("{}m ago", seconds / MINUTE)
    } else {
        "Just now".to_string()
    }
}

/// Relative age of `raw` as seen at `now`. Future timestamps read as
/// "Just now".
pub fn time_ago(raw: Option<&str>, now: DateTime<Utc>) -> String {
    match raw.and_then(parse_timestamp) {
        Some(ts) => age_label((now - ts).num_seconds()),
        None => "Unknown".to_string(),
    }
}

/// `Mar 9, 2025, 02:05 PM` style, in UTC.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|ts| ts.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| NO_DATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn ago(seconds: i64) -> String {
        let then = (now() - Duration::seconds(seconds)).to_rfc3339();
        time_ago(Some(then.as_str()), now())
    }

    #[test]
    fn test_time_ago_buckets() {
        assert_eq!(ago(45), "Just now");
        assert_eq!(ago(60), "1m ago");
        assert_eq!(ago(3600 * 2), "2h ago");
        assert_eq!(ago(86400 * 3), "3d ago");
        assert_eq!(ago(86400 * 13), "1w ago");
        assert_eq!(ago(86400 * 29), "4w ago");
        assert_eq!(ago(86400 * 65), "2mo ago");
        assert_eq!(ago(86400 * 364), "12mo ago");
        assert_eq!(ago(86400 * 400), "1y ago");
    }

    #[test]
    fn test_time_ago_missing_or_future() {
        assert_eq!(time_ago(None, now()), "Unknown");
        assert_eq!(time_ago(Some("not a date"), now()), "Unknown");
        assert_eq!(ago(-300), "Just now");
    }

    #[test]
    fn test_parse_sqlite_timestamps() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(parse_timestamp("2025-03-09 14:05:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-09T14:05:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-09T14:05:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-09T16:05:00+02:00"), Some(expected));
        assert!(parse_timestamp("2025-03-09T14:05:00.250").is_some());
        assert!(parse_timestamp("2025-03-09").is_some());
    }

    #[test]
    fn test_timestamp_millis_defaults_to_epoch() {
        assert_eq!(timestamp_millis(None), 0);
        assert_eq!(timestamp_millis(Some("garbage")), 0);
        assert_eq!(timestamp_millis(Some("1970-01-01T00:00:01Z")), 1000);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(Some("2025-03-09T14:05:00Z")),
            "Mar 9, 2025, 02:05 PM"
        );
        assert_eq!(format_date(Some("2024-12-25 09:30:00")), "Dec 25, 2024, 09:30 AM");
        assert_eq!(format_date(None), "—");
        assert_eq!(format_date(Some("")), "—");
    }
}
