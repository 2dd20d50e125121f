//! Unix timestamp strings

use chrono::{DateTime, TimeZone};

/// Timestamp text for any `chrono` date-time.
pub trait DateExt {
    /// Whole seconds since the Unix epoch.
    fn timestamp_string(&self) -> String;

    /// Milliseconds since the Unix epoch, rounded to the nearest millisecond.
    fn milli_timestamp_string(&self) -> String;
}

impl<Tz: TimeZone> DateExt for DateTime<Tz> {
    fn timestamp_string(&self) -> String {
        self.timestamp().to_string()
    }

    fn milli_timestamp_string(&self) -> String {
        let nanos = i64::from(self.timestamp_subsec_nanos());
        let millis = self.timestamp() * 1_000 + (nanos + 500_000) / 1_000_000;
        millis.to_string()
    }
}
