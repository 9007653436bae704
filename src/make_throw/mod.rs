//! Conditional raising of structured errors.
//!
//! [`make_throw`] either fails unconditionally with a plain message, or builds a
//! [`ThrowObject`] (message, HTTP status, payload) and fails only when the
//! configured [`Condition`] holds.

pub mod types;

use log::debug;
use self::types::{MakeThrowOptions, ThrowObject, ThrowValue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Thrown<T> {
    #[error("{0}")]
    Plain(ThrowValue),

    #[error("{0}")]
    Object(ThrowObject<T>),
}

impl<T> Thrown<T> {
    /// The structured object, if this was an extended throw.
    pub fn object(&self) -> Option<&ThrowObject<T>> {
        match self {
            Thrown::Plain(_) => None,
            Thrown::Object(object) => Some(object),
        }
    }
}

/// Raises a plain or structured error.
///
/// # Errors
///
/// * Plain options (text or number) always return [`Thrown::Plain`].
/// * Extended options return [`Thrown::Object`] when their condition holds,
///   otherwise `Ok(())`.
///
/// # Examples
///
/// ```
/// use frontutils::{make_throw, Thrown, ThrowOptions, ThrowValue};
///
/// fn load(id: u32) -> Result<(), Thrown<u32>> {
///     make_throw(
///         ThrowOptions::builder()
///             .message("Record not found")
///             .http_status(404)
///             .data(id)
///             .condition(id == 0)
///             .build(),
///     )?;
///     Ok(())
/// }
///
/// assert!(load(7).is_ok());
/// let err = load(0).unwrap_err();
/// assert_eq!(err.to_string(), "Record not found (HTTP 404)");
/// assert_eq!(err.object().unwrap().http_status, Some(ThrowValue::Number(404)));
///
/// let plain = make_throw::<()>("boom").unwrap_err();
/// assert!(matches!(plain, Thrown::Plain(ThrowValue::Text(ref m)) if m == "boom"));
/// ```
pub fn make_throw<T>(options: impl Into<MakeThrowOptions<T>>) -> Result<(), Thrown<T>> {
    match options.into() {
        MakeThrowOptions::Plain(value) => Err(Thrown::Plain(value)),
        MakeThrowOptions::Extended(options) => {
            let (object, condition) = ThrowObject::from_options(options);
            if condition.holds() {
                debug!("Throwing structured error: {object}");
                return Err(Thrown::Object(object));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::types::{Condition, ThrowOptions};
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn plain_values_always_throw() {
        assert!(matches!(
            make_throw::<()>(String::from("fatal")),
            Err(Thrown::Plain(ThrowValue::Text(_)))
        ));
        assert!(matches!(
            make_throw::<()>(500_i64),
            Err(Thrown::Plain(ThrowValue::Number(500)))
        ));
    }

    #[test]
    fn default_options_throw_an_empty_object() {
        let err = make_throw(ThrowOptions::<()>::builder().build()).unwrap_err();
        let object = err.object().unwrap();
        assert_eq!(object.message, None);
        assert_eq!(object.http_status, None);
        assert_eq!(serde_json::to_value(object).unwrap(), json!({}));
        assert_eq!(err.to_string(), "error");
    }

    #[test]
    fn false_condition_does_not_throw() {
        let options = ThrowOptions::<()>::builder()
            .message("never")
            .condition(false)
            .build();
        assert!(make_throw(options).is_ok());
    }

    #[test]
    fn deferred_condition_is_evaluated_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let options = ThrowOptions::<()>::builder()
            .message("checked")
            .condition(Condition::when(move || {
                counter.set(counter.get() + 1);
                true
            }))
            .build();
        assert!(make_throw(options).is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn serializes_present_fields_only() {
        let options = ThrowOptions::builder()
            .message("Validation failed")
            .http_status(422)
            .data(json!({ "field": "email" }))
            .build();
        let err = make_throw(options).unwrap_err();
        assert_eq!(
            serde_json::to_value(err.object().unwrap()).unwrap(),
            json!({
                "message": "Validation failed",
                "httpStatus": 422,
                "data": { "field": "email" }
            })
        );
    }

    #[test]
    fn keeps_empty_fields_when_asked() {
        let options = ThrowOptions::<String>::builder()
            .http_status("")
            .delete_empty(false)
            .build();
        let err = make_throw(options).unwrap_err();
        assert_eq!(
            serde_json::to_value(err.object().unwrap()).unwrap(),
            json!({ "message": "", "httpStatus": "", "data": null })
        );
    }

    #[test]
    fn provided_data_survives_delete_empty() {
        let options = ThrowOptions::builder()
            .message("")
            .data(String::new())
            .build();
        let err = make_throw(options).unwrap_err();
        let object = err.object().unwrap();
        assert_eq!(object.message, None);
        assert_eq!(object.data.as_deref(), Some(""));
        assert_eq!(serde_json::to_value(object).unwrap(), json!({ "data": "" }));
    }

    #[test]
    fn zero_status_is_not_empty() {
        let options = ThrowOptions::<()>::builder().http_status(0).build();
        let err = make_throw(options).unwrap_err();
        assert_eq!(err.object().unwrap().http_status, Some(ThrowValue::Number(0)));
        assert_eq!(err.to_string(), "HTTP 0");
    }
}
