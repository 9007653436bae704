//! Source of "today" for operations that default to the current date.

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
///
/// Range generators take a `Clock` instead of reading the system time directly,
/// so callers (and tests) can pin the date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall-clock date at call time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
///
/// # Examples
///
/// ```
/// use frontutils::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
/// assert_eq!(FixedClock(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
