use crate::AnyDateTime;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Anything that can be resolved to a calendar date.
pub trait AnyDate {
    fn get_date(self) -> Option<NaiveDate>;
}

impl AnyDate for NaiveDate {
    fn get_date(self) -> Option<NaiveDate> {
        Some(self)
    }
}

impl AnyDate for NaiveDateTime {
    fn get_date(self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> AnyDate for DateTime<Tz> {
    fn get_date(self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl AnyDate for &str {
    fn get_date(self) -> Option<NaiveDate> {
        // Try naive date first, then fall back to any datetime layout
        if let Ok(naive_date) = NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d") {
            return Some(naive_date);
        }
        self.get_datetime().map(|dt| dt.date())
    }
}

impl AnyDate for String {
    fn get_date(self) -> Option<NaiveDate> {
        self.as_str().get_date()
    }
}

impl AnyDate for &String {
    fn get_date(self) -> Option<NaiveDate> {
        self.as_str().get_date()
    }
}

impl<T: AnyDate> AnyDate for Option<T> {
    fn get_date(self) -> Option<NaiveDate> {
        self.and_then(AnyDate::get_date)
    }
}
