//! Human-facing renderings of dates and times.
//!
//! Every function accepts anything implementing [`AnyDateTime`] and returns an
//! empty string when the input cannot be resolved.

use crate::AnyDateTime;

fn render<T: AnyDateTime>(value: T, pattern: &str) -> String {
    value
        .get_datetime()
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_default()
}

/// `dd.mm.yyyy`
///
/// ```
/// use frontutils::human_date;
///
/// assert_eq!(human_date("2023-07-04T09:15:00"), "04.07.2023");
/// assert_eq!(human_date("not a date"), "");
/// ```
pub fn human_date<T: AnyDateTime>(value: T) -> String {
    render(value, "%d.%m.%Y")
}

/// `HH:MM`, 24-hour clock.
pub fn human_time<T: AnyDateTime>(value: T) -> String {
    render(value, "%H:%M")
}

/// `dd.mm.yyyy HH:MM`
pub fn human_date_time<T: AnyDateTime>(value: T) -> String {
    render(value, "%d.%m.%Y %H:%M")
}

/// `YYYY-MM-DDTHH:MM:SS.mmm`, no offset.
///
/// ```
/// use frontutils::iso_date;
///
/// assert_eq!(iso_date("2023-07-04 09:15:03"), "2023-07-04T09:15:03.000");
/// ```
pub fn iso_date<T: AnyDateTime>(value: T) -> String {
    render(value, "%Y-%m-%dT%H:%M:%S%.3f")
}

/// `YYYY-MM-DD`
pub fn date_without_time<T: AnyDateTime>(value: T) -> String {
    render(value, "%Y-%m-%d")
}
