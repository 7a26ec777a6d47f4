//! Timestamp formatting shared by the document headers

use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Format epoch milliseconds for display; out-of-range values print as-is
pub fn format_epoch_millis(millis: f64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Format an ISO timestamp for display; unparseable input prints as-is
pub fn format_iso(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc).format(DATE_FORMAT).to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch_millis() {
        assert_eq!(format_epoch_millis(1_704_067_200_000.0), "2024-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_format_iso() {
        assert_eq!(format_iso("2024-01-01T10:30:00+02:00"), "2024-01-01 08:30:00 UTC");
        assert_eq!(format_iso("yesterday"), "yesterday");
    }
}
