//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for build and deploy
//! timestamps.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::from_unix_millis(1_718_461_845_123);
//! assert_eq!(dt.to_iso8601(), "2024-06-15T14:30:45.123Z");
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millis: u16,
}

impl DateTimeUtc {
    /// Current wall-clock time.
    ///
    /// Clocks set before 1970 collapse to the epoch.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self::from_unix_millis(u64::try_from(millis).unwrap_or(u64::MAX))
    }

    /// Convert milliseconds since the Unix epoch.
    #[allow(clippy::cast_possible_truncation)] // Each component is range-limited by % or /
    pub fn from_unix_millis(ms: u64) -> Self {
        let secs = ms / 1000;
        let days = secs / 86_400;
        let rem = secs % 86_400;

        let (year, month, day) = civil_from_days(days);

        Self {
            year,
            month,
            day,
            hour: (rem / 3600) as u8,
            minute: ((rem / 60) % 60) as u8,
            second: (rem % 60) as u8,
            millis: (ms % 1000) as u16,
        }
    }

    /// Format as ISO 8601 with milliseconds.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SS.sssZ`
    pub fn to_iso8601(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millis
        )
    }
}

/// Days since 1970-01-01 to (year, month, day).
///
/// Howard Hinnant's `civil_from_days`, restricted to non-negative day counts.
#[allow(clippy::cast_possible_truncation)]
const fn civil_from_days(days: u64) -> (u16, u8, u8) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year as u16, month as u8, day as u8)
}
