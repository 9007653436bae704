use crate::dates::error::DateRangeError;
use crate::AnyDate;
use chrono::NaiveDate;
use log::debug;
use std::fmt::Debug;

/// Every calendar day from `start` through `end`, both included.
///
/// Returns an empty list when `end` is before `start`.
///
/// # Errors
///
/// Returns [`DateRangeError::InvalidDate`] if either bound cannot be resolved to a date.
///
/// # Examples
///
/// ```
/// use frontutils::generate_day_range;
/// use chrono::NaiveDate;
///
/// let days = generate_day_range("2024-02-28", "2024-03-01").unwrap();
/// assert_eq!(
///     days,
///     [
///         NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     ]
/// );
/// ```
pub fn generate_day_range<S, E>(start: S, end: E) -> Result<Vec<NaiveDate>, DateRangeError>
where
    S: AnyDate + Debug,
    E: AnyDate + Debug,
{
    let start = resolve(start)?;
    let end = resolve(end)?;
    Ok(start.iter_days().take_while(|day| *day <= end).collect())
}

fn resolve<T: AnyDate + Debug>(value: T) -> Result<NaiveDate, DateRangeError> {
    let label = format!("{value:?}");
    value.get_date().ok_or_else(|| {
        debug!("Could not resolve day range bound {label}");
        DateRangeError::InvalidDate(label)
    })
}
