use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Anything that can be resolved to a wall-clock date and time.
///
/// Zoned values keep the wall time of their own offset; nothing is converted
/// to the machine's local zone.
pub trait AnyDateTime {
    fn get_datetime(self) -> Option<NaiveDateTime>;
}

impl AnyDateTime for NaiveDateTime {
    fn get_datetime(self) -> Option<NaiveDateTime> {
        Some(self)
    }
}

impl AnyDateTime for NaiveDate {
    fn get_datetime(self) -> Option<NaiveDateTime> {
        self.and_hms_opt(0, 0, 0)
    }
}

impl<Tz: TimeZone> AnyDateTime for DateTime<Tz> {
    fn get_datetime(self) -> Option<NaiveDateTime> {
        Some(self.naive_local())
    }
}

impl AnyDateTime for &str {
    fn get_datetime(self) -> Option<NaiveDateTime> {
        let s = self.trim();
        if s.is_empty() {
            return None;
        }
        // RFC 3339 with offset (e.g. 2023-10-26T10:00:00+02:00 or ...Z)
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return dt.get_datetime();
        }
        if let Some(naive_dt) = DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        {
            return Some(naive_dt);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(AnyDateTime::get_datetime)
    }
}

impl AnyDateTime for String {
    fn get_datetime(self) -> Option<NaiveDateTime> {
        self.as_str().get_datetime()
    }
}

impl AnyDateTime for &String {
    fn get_datetime(self) -> Option<NaiveDateTime> {
        self.as_str().get_datetime()
    }
}

impl<T: AnyDateTime> AnyDateTime for Option<T> {
    fn get_datetime(self) -> Option<NaiveDateTime> {
        self.and_then(AnyDateTime::get_datetime)
    }
}
