use crate::dates::error::DateRangeError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A calendar month of a specific year.
///
/// Ordering follows `(year, month)`, so ranges of `YearMonth` sort chronologically.
///
/// # Examples
///
/// ```
/// use frontutils::YearMonth;
///
/// let bound: YearMonth = "2023-7".parse().unwrap();
/// assert_eq!(bound, YearMonth::new(2023, 7).unwrap());
/// assert_eq!(bound.to_string(), "2023-07");
/// assert_eq!(bound.month_stamp(), "2023-07-01");
///
/// assert!("20231-07".parse::<YearMonth>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Years are limited to what a four-digit stamp can hold.
pub(crate) const MAX_YEAR: i32 = 9999;

impl YearMonth {
    /// Returns `None` when `year` is outside `0..=9999` or `month` outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        ((0..=MAX_YEAR).contains(&year) && (1..=12).contains(&month))
            .then_some(Self { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Number of months elapsed since January of year 0.
    pub fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Signed distance in months from `self` to `other`.
    pub fn months_until(self, other: YearMonth) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// The first day of this month rendered as `YYYY-MM-01`.
    pub fn month_stamp(self) -> String {
        format!("{:04}-{:02}-01", self.year, self.month)
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl TryFrom<NaiveDate> for YearMonth {
    type Error = DateRangeError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.year(), date.month())
            .ok_or_else(|| DateRangeError::InvalidDate(date.to_string()))
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parses `YYYY-M`, `YYYY-MM` or `YYYY-MM-DD`. The year must have exactly four
/// digits. Anything after the month is ignored.
impl FromStr for YearMonth {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| DateRangeError::InvalidDateFormat {
            input: s.to_string(),
            reason,
        };

        let mut parts = s.split('-');
        let year_part = parts.next().unwrap_or_default();
        if year_part.len() != 4 {
            return Err(invalid("year must have four digits"));
        }
        let year = parse_digits::<i32>(year_part)
            .ok_or_else(|| invalid("year is not a number"))?;

        let month_part = parts
            .next()
            .ok_or_else(|| invalid("missing month component"))?;
        let month = parse_digits::<u32>(month_part)
            .ok_or_else(|| invalid("month is not a number"))?;

        Self::new(year, month).ok_or_else(|| invalid("month must be between 1 and 12"))
    }
}

// Only plain ASCII digits; rejects signs and whitespace that `str::parse` would allow.
fn parse_digits<T: FromStr>(part: &str) -> Option<T> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
