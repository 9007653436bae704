//! Date ranges, class-name and style helpers, HTTP status checks, JWT payload
//! decoding and conditional error raising.
//!
//! Each fallible helper returns its own error type ([`DateRangeError`],
//! [`JwtError`]). Callers mixing several of them can use [`FrontUtilsError`] as
//! the error type of their own functions and convert with `?`.

mod class_mods;
mod coerce;
mod dates;
mod error;
mod http;
mod jwt;
mod make_throw;
mod style;
mod types;

pub use error::FrontUtilsError;

pub use dates::clock::{Clock, FixedClock, SystemClock};
pub use dates::day_range::generate_day_range;
pub use dates::error::DateRangeError;
pub use dates::format::{date_without_time, human_date, human_date_time, human_time, iso_date};
pub use dates::month_range::{generate_month_range, generate_month_range_with, MonthRangeGenerator};

pub use types::traits::any::any_date::AnyDate;
pub use types::traits::any::any_datetime::AnyDateTime;
pub use types::traits::types::YearMonth;

pub use class_mods::{
    get_class_mods, get_icon_class_mods, ClassMods, ClassModsOptions, DEFAULT_DIVIDER,
    DEFAULT_ICON_PREFIX,
};
pub use style::{style_width, InlineWidth, Width, DEFAULT_WIDTH_UNIT};

pub use http::{is_error_http, is_success_http};

pub use jwt::error::JwtError;
pub use jwt::payload::{decode_jwt_payload, parse_jwt};

pub use coerce::{get_bool, ToBool};

pub use make_throw::types::{Condition, MakeThrowOptions, ThrowObject, ThrowOptions, ThrowValue};
pub use make_throw::{make_throw, Thrown};
