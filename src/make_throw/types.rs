use bon::Builder;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A message or status that may be given as text or as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ThrowValue {
    Text(String),
    Number(i64),
}

impl ThrowValue {
    /// Only empty text counts as empty; `0` does not.
    pub fn is_empty(&self) -> bool {
        matches!(self, ThrowValue::Text(text) if text.is_empty())
    }
}

impl Default for ThrowValue {
    fn default() -> Self {
        ThrowValue::Text(String::new())
    }
}

impl Display for ThrowValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ThrowValue::Text(text) => f.write_str(text),
            ThrowValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for ThrowValue {
    fn from(value: &str) -> Self {
        ThrowValue::Text(value.to_string())
    }
}

impl From<String> for ThrowValue {
    fn from(value: String) -> Self {
        ThrowValue::Text(value)
    }
}

impl From<i64> for ThrowValue {
    fn from(value: i64) -> Self {
        ThrowValue::Number(value)
    }
}

impl From<i32> for ThrowValue {
    fn from(value: i32) -> Self {
        ThrowValue::Number(i64::from(value))
    }
}

impl From<u16> for ThrowValue {
    fn from(value: u16) -> Self {
        ThrowValue::Number(i64::from(value))
    }
}

/// Decides whether an extended throw actually fires.
pub enum Condition {
    Value(bool),
    Check(Box<dyn FnOnce() -> bool>),
}

impl Condition {
    /// Deferred condition, evaluated once when the throw is attempted.
    pub fn when(check: impl FnOnce() -> bool + 'static) -> Self {
        Condition::Check(Box::new(check))
    }

    pub(crate) fn holds(self) -> bool {
        match self {
            Condition::Value(value) => value,
            Condition::Check(check) => check(),
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Value(true)
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition::Value(value)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Condition::Check(_) => f.write_str("Check(..)"),
        }
    }
}

/// Settings for the structured form of [`make_throw`](crate::make_throw).
///
/// ```
/// use frontutils::{Condition, ThrowOptions};
///
/// let options: ThrowOptions<()> = ThrowOptions::builder()
///     .message("Not found")
///     .http_status(404)
///     .condition(Condition::when(|| true))
///     .build();
/// assert!(options.delete_empty);
/// ```
#[derive(Debug, Builder)]
pub struct ThrowOptions<T> {
    #[builder(into)]
    pub message: Option<ThrowValue>,
    #[builder(into)]
    pub http_status: Option<ThrowValue>,
    /// Kept whenever set, even when it is empty text and `delete_empty` is on.
    pub data: Option<T>,
    /// Drop empty text fields from the thrown object. Defaults to `true`.
    #[builder(default = true)]
    pub delete_empty: bool,
    /// Defaults to always throwing.
    #[builder(into, default)]
    pub condition: Condition,
}

/// Input to [`make_throw`](crate::make_throw): a plain value or structured options.
pub enum MakeThrowOptions<T> {
    /// Always thrown, as-is.
    Plain(ThrowValue),
    Extended(ThrowOptions<T>),
}

impl<T> From<&str> for MakeThrowOptions<T> {
    fn from(value: &str) -> Self {
        MakeThrowOptions::Plain(value.into())
    }
}

impl<T> From<String> for MakeThrowOptions<T> {
    fn from(value: String) -> Self {
        MakeThrowOptions::Plain(value.into())
    }
}

impl<T> From<i64> for MakeThrowOptions<T> {
    fn from(value: i64) -> Self {
        MakeThrowOptions::Plain(value.into())
    }
}

impl<T> From<ThrowOptions<T>> for MakeThrowOptions<T> {
    fn from(value: ThrowOptions<T>) -> Self {
        MakeThrowOptions::Extended(value)
    }
}

/// The structured error raised by the extended form.
///
/// Fields set to `None` were dropped as empty and are left out when serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowObject<T> {
    pub message: Option<ThrowValue>,
    pub http_status: Option<ThrowValue>,
    pub data: Option<T>,
    /// Set when empty fields are kept; `data` then serializes as `null` when absent.
    pub(crate) keep_empty_data: bool,
}

impl<T> ThrowObject<T> {
    pub(crate) fn from_options(options: ThrowOptions<T>) -> (Self, Condition) {
        let ThrowOptions {
            message,
            http_status,
            data,
            delete_empty,
            condition,
        } = options;

        let field = |value: Option<ThrowValue>| {
            let value = value.unwrap_or_default();
            (!(delete_empty && value.is_empty())).then_some(value)
        };

        let object = ThrowObject {
            message: field(message),
            http_status: field(http_status),
            data,
            keep_empty_data: !delete_empty,
        };
        (object, condition)
    }
}

impl<T> Display for ThrowObject<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let message = self.message.as_ref().filter(|m| !m.is_empty());
        let status = self.http_status.as_ref().filter(|s| !s.is_empty());
        match (message, status) {
            (Some(message), Some(status)) => write!(f, "{message} (HTTP {status})"),
            (Some(message), None) => write!(f, "{message}"),
            (None, Some(status)) => write!(f, "HTTP {status}"),
            (None, None) => f.write_str("error"),
        }
    }
}

impl<T: Serialize> Serialize for ThrowObject<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(message) = &self.message {
            map.serialize_entry("message", message)?;
        }
        if let Some(status) = &self.http_status {
            map.serialize_entry("httpStatus", status)?;
        }
        if self.data.is_some() || self.keep_empty_data {
            map.serialize_entry("data", &self.data)?;
        }
        map.end()
    }
}
