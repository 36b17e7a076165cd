//! Human-readable timestamp formatting.

use chrono::{DateTime, Utc};

/// Formats an absolute timestamp into the fixed display layout:
/// three-letter weekday, two-digit day, three-letter month, 24-hour time,
/// timezone abbreviation, four-digit year.
///
/// ```rust
/// use chrono::DateTime;
/// use parlance_render::user_friendly_date;
///
/// let epoch = DateTime::from_timestamp(0, 0).unwrap();
/// assert_eq!(user_friendly_date(epoch), "Thu 01 Jan 00:00:00 UTC 1970");
/// ```
pub fn user_friendly_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%a %d %b %H:%M:%S %Z %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_layout() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(user_friendly_date(epoch), "Thu 01 Jan 00:00:00 UTC 1970");
    }

    #[test]
    fn two_digit_day_and_24_hour_clock() {
        // 2024-03-05 14:07:09 UTC, a Tuesday.
        let ts = DateTime::from_timestamp(1_709_647_629, 0).unwrap();
        assert_eq!(user_friendly_date(ts), "Tue 05 Mar 14:07:09 UTC 2024");
    }
}
