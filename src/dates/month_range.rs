//! Enumerates the first day of every calendar month between two date bounds.
//!
//! Bounds are strings of the form `YYYY-M`, `YYYY-MM` or `YYYY-MM-DD`; only the
//! year and month are read. The output is a list of `YYYY-MM-01` stamps, one per
//! month, both ends included.

use crate::dates::clock::{Clock, SystemClock};
use crate::dates::error::DateRangeError;
use crate::YearMonth;
use bon::bon;
use log::debug;

/// Generates month-start stamps, resolving an omitted end bound through a [`Clock`].
///
/// # Examples
///
/// ```
/// use frontutils::{FixedClock, MonthRangeGenerator};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2023, 2, 14).unwrap();
/// let generator = MonthRangeGenerator::new(FixedClock(today));
///
/// let explicit = generator.range("2022-11").end("2023-01").call().unwrap();
/// assert_eq!(explicit, ["2022-11-01", "2022-12-01", "2023-01-01"]);
///
/// // Without an end bound the range runs through the clock's current month.
/// let until_today = generator.range("2022-12").call().unwrap();
/// assert_eq!(until_today, ["2022-12-01", "2023-01-01", "2023-02-01"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MonthRangeGenerator<C = SystemClock> {
    clock: C,
}

#[bon]
impl<C: Clock> MonthRangeGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Builds the month range starting at `start`.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.end(&str)`: inclusive end bound. Empty or omitted means "today" as
    ///   reported by the generator's clock.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::InvalidDateFormat`] if either bound does not
    /// carry a four-digit year and a month in `1..=12`, and
    /// [`DateRangeError::InvalidDate`] if the clock's date lies outside years
    /// `0000..=9999`.
    #[builder(start_fn = range)]
    #[doc(hidden)]
    pub fn build_range(
        &self,
        #[builder(start_fn)] start: &str,
        end: Option<&str>,
    ) -> Result<Vec<String>, DateRangeError> {
        generate_month_range_with(start, end.unwrap_or_default(), &self.clock)
    }
}

/// Month-start stamps from `start` through `end`, defaulting `end` to the local date.
///
/// An empty `start` yields an empty list. An `end` before `start` yields an
/// empty list as well.
///
/// ```
/// use frontutils::generate_month_range;
///
/// assert_eq!(
///     generate_month_range("2023-01", "2023-03").unwrap(),
///     ["2023-01-01", "2023-02-01", "2023-03-01"]
/// );
/// assert!(generate_month_range("", "2023-01").unwrap().is_empty());
/// assert!(generate_month_range("2023-05", "2023-01").unwrap().is_empty());
/// assert!(generate_month_range("2023-xx", "2023-01").is_err());
/// ```
pub fn generate_month_range(start: &str, end: &str) -> Result<Vec<String>, DateRangeError> {
    generate_month_range_with(start, end, &SystemClock)
}

/// Same as [`generate_month_range`], reading "today" from `clock`.
pub fn generate_month_range_with<C: Clock + ?Sized>(
    start: &str,
    end: &str,
    clock: &C,
) -> Result<Vec<String>, DateRangeError> {
    if start.is_empty() {
        return Ok(Vec::new());
    }

    let start: YearMonth = start.parse().inspect_err(|e| debug!("Rejected start bound: {e}"))?;
    let end: YearMonth = if end.is_empty() {
        YearMonth::try_from(clock.today())?
    } else {
        end.parse().inspect_err(|e| debug!("Rejected end bound: {e}"))?
    };

    Ok(month_stamps(start, end))
}

fn month_stamps(start: YearMonth, end: YearMonth) -> Vec<String> {
    let capacity = usize::try_from(start.months_until(end) + 1).unwrap_or(0);
    let mut stamps = Vec::with_capacity(capacity);

    for year in start.year()..=end.year() {
        let first = if year == start.year() { start.month() } else { 1 };
        let last = if year == end.year() { end.month() } else { 12 };
        stamps.extend((first..=last).map(|month| format!("{year:04}-{month:02}-01")));
    }

    stamps
}
