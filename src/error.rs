use crate::dates::error::DateRangeError;
use crate::jwt::error::JwtError;
use thiserror::Error;

/// Any error produced by this crate's fallible helpers.
///
/// No helper returns it directly; it is the `?` target for callers combining them.
///
/// ```
/// use frontutils::{decode_jwt_payload, generate_month_range, FrontUtilsError};
/// use serde_json::Value;
///
/// fn months_and_claims(token: &str) -> Result<(Vec<String>, Value), FrontUtilsError> {
///     let months = generate_month_range("2023-01", "2023-02")?;
///     let claims = decode_jwt_payload(token)?;
///     Ok((months, claims))
/// }
///
/// let err = months_and_claims("not-a-token").unwrap_err();
/// assert!(matches!(err, FrontUtilsError::Jwt(_)));
/// ```
#[derive(Debug, Error)]
pub enum FrontUtilsError {
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    #[error(transparent)]
    Jwt(#[from] JwtError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_area_errors_transparently() {
        let err: FrontUtilsError = DateRangeError::InvalidDate("\"soon\"".into()).into();
        assert_eq!(err.to_string(), "Could not interpret \"soon\" as a calendar date");

        let err: FrontUtilsError = JwtError::MissingPayload.into();
        assert!(matches!(err, FrontUtilsError::Jwt(JwtError::MissingPayload)));
    }

    #[test]
    fn question_mark_converts() {
        fn months() -> Result<Vec<String>, FrontUtilsError> {
            Ok(crate::generate_month_range("2023-1x", "2023-02")?)
        }
        assert!(matches!(months(), Err(FrontUtilsError::DateRange(_))));
    }
}
