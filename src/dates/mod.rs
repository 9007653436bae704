pub mod clock;
pub mod day_range;
pub mod error;
pub mod format;
pub mod month_range;
