//! HTTP response code checks.
//!
//! Only the 4xx and 5xx classes count as errors. Anything else, including codes
//! outside the registered ranges, is treated as success.

/// `true` for codes in `400..=599`.
///
/// ```
/// use frontutils::is_error_http;
///
/// assert!(is_error_http(404));
/// assert!(is_error_http(503));
/// assert!(!is_error_http(204));
/// ```
pub fn is_error_http(code: impl Into<i64>) -> bool {
    let code: i64 = code.into();
    (400..=599).contains(&code)
}

/// Negation of [`is_error_http`].
pub fn is_success_http(code: impl Into<i64>) -> bool {
    !is_error_http(code)
}
