//! # Formatting Utilities
//!
//! Date formatting for the dashboard table and CSV export. For address
//! formatting, use [`shared::utils::format_address`].
//!
//! ## Functions
//!
//! - [`locale_datetime`] - Date and time in the browser's local timezone
//! - [`locale_date`] - Date only, local timezone
//! - [`format_datetime`] / [`format_date`] - Same layout for an explicit timezone

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

const DATETIME_LAYOUT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const DATE_LAYOUT: &str = "%-m/%-d/%Y";

/// Format a timestamp as `month/day/year, h:mm:ss AM`.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use mint_web::utils::format::format_datetime;
///
/// let ts = Utc.with_ymd_and_hms(2024, 5, 1, 14, 3, 9).unwrap();
/// assert_eq!(format_datetime(&ts), "5/1/2024, 2:03:09 PM");
/// ```
pub fn format_datetime<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.format(DATETIME_LAYOUT).to_string()
}

/// Format a timestamp as `month/day/year`.
pub fn format_date<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.format(DATE_LAYOUT).to_string()
}

/// [`format_datetime`] in the viewer's local timezone.
pub fn locale_datetime(ts: &DateTime<Utc>) -> String {
    format_datetime(&ts.with_timezone(&Local))
}

/// [`format_date`] in the viewer's local timezone.
pub fn locale_date(ts: &DateTime<Utc>) -> String {
    format_date(&ts.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_datetime() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 0, 5, 0).unwrap();
        assert_eq!(format_datetime(&ts), "12/31/2024, 12:05:00 AM");
        assert_eq!(format_date(&ts), "12/31/2024");
    }

    #[test]
    fn test_format_respects_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 0, 5, 0).unwrap();
        let west = ts.with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(format_datetime(&west), "12/30/2024, 7:05:00 PM");
    }
}
