//! Utilities for date and time formatting
//!
//! The API sends timestamps as fractional Unix seconds.

use chrono::{DateTime, Utc};

fn to_datetime(timestamp: f64) -> Option<DateTime<Utc>> {
    if !timestamp.is_finite() {
        return None;
    }
    let secs = timestamp.trunc() as i64;
    let nanos = ((timestamp - timestamp.trunc()) * 1e9).round() as u32;
    DateTime::from_timestamp(secs, nanos.min(999_999_999))
}

/// Format a Unix timestamp to DD/MM/YYYY HH:MM
/// Example: 1710511346.5 -> "15/03/2024 14:02"
pub fn format_timestamp(timestamp: Option<f64>) -> String {
    timestamp
        .and_then(to_datetime)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Format a Unix timestamp to DD/MM/YYYY
pub fn format_date(timestamp: Option<f64>) -> String {
    timestamp
        .and_then(to_datetime)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(Some(1710511346.5)), "15/03/2024 14:02");
        assert_eq!(format_timestamp(Some(0.0)), "01/01/1970 00:00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(1710511346.0)), "15/03/2024");
    }

    #[test]
    fn test_missing_or_invalid() {
        assert_eq!(format_timestamp(None), "—");
        assert_eq!(format_date(Some(f64::NAN)), "—");
    }
}
