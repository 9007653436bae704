use serde_json::Value;

/// Loose conversion to `bool`.
///
/// Only a real `true` or the exact string `"true"` count as true.
pub trait ToBool {
    fn to_bool(&self) -> bool;
}

impl ToBool for bool {
    fn to_bool(&self) -> bool {
        *self
    }
}

impl ToBool for str {
    fn to_bool(&self) -> bool {
        self == "true"
    }
}

impl ToBool for String {
    fn to_bool(&self) -> bool {
        self.as_str().to_bool()
    }
}

impl ToBool for Value {
    fn to_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::String(s) => s.to_bool(),
            _ => false,
        }
    }
}

impl<T: ToBool + ?Sized> ToBool for &T {
    fn to_bool(&self) -> bool {
        (**self).to_bool()
    }
}

impl<T: ToBool> ToBool for Option<T> {
    fn to_bool(&self) -> bool {
        self.as_ref().is_some_and(|value| value.to_bool())
    }
}

/// ```
/// use frontutils::get_bool;
/// use serde_json::json;
///
/// assert!(get_bool(&true));
/// assert!(get_bool("true"));
/// assert!(!get_bool("TRUE"));
/// assert!(get_bool(&json!("true")));
/// assert!(!get_bool(&json!(1)));
/// ```
pub fn get_bool<T: ToBool + ?Sized>(value: &T) -> bool {
    value.to_bool()
}
