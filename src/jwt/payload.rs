//! Reads the claims of a JSON Web Token without verifying it.
//!
//! Only the middle (payload) segment is decoded. Signatures are not checked;
//! use this for displaying claims client-side, never for authorization.

use crate::jwt::error::JwtError;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use log::debug;
use serde::de::DeserializeOwned;

// JWT segments are unpadded base64url, but some issuers pad them anyway.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes the payload segment of `token` into `T`.
///
/// Payloads encoded with the standard base64 alphabet (`+`, `/`) are accepted as well.
///
/// # Errors
///
/// * [`JwtError::MissingPayload`] if `token` has no second `.`-separated segment.
/// * [`JwtError::Base64`] if the segment is not valid base64.
/// * [`JwtError::Json`] if the decoded bytes do not deserialize into `T`.
pub fn decode_jwt_payload<T: DeserializeOwned>(token: &str) -> Result<T, JwtError> {
    let segment = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(JwtError::MissingPayload)?;

    let normalized: String = segment
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = PAYLOAD_ENGINE.decode(normalized)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Lenient form of [`decode_jwt_payload`]: `None` on any failure.
///
/// ```
/// use frontutils::parse_jwt;
/// use serde_json::Value;
///
/// // {"alg":"HS256"} . {"sub":"42","name":"Ada"} . signature
/// let token = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiI0MiIsIm5hbWUiOiJBZGEifQ.c2ln";
/// let claims: Value = parse_jwt(token).unwrap();
/// assert_eq!(claims["name"], "Ada");
///
/// assert!(parse_jwt::<Value>("not-a-token").is_none());
/// ```
pub fn parse_jwt<T: DeserializeOwned>(token: &str) -> Option<T> {
    decode_jwt_payload(token)
        .inspect_err(|e| debug!("Ignoring unreadable JWT payload: {e}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Claims {
        sub: i64,
        email: String,
        exp: i64,
    }

    fn token_with(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{payload}.signature")
    }

    #[test]
    fn decodes_typed_claims() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":7,"email":"a@b.io","exp":1700000000}"#);
        let claims: Claims = decode_jwt_payload(&token_with(&payload)).unwrap();
        assert_eq!(
            claims,
            Claims {
                sub: 7,
                email: "a@b.io".into(),
                exp: 1_700_000_000
            }
        );
    }

    #[test]
    fn accepts_padded_and_standard_alphabet_payloads() {
        // "??>" encodes to "Pz8+" in the standard alphabet and "Pz8-" in base64url
        let raw = json!({ "note": "??>", "n": 1 }).to_string();
        let standard = STANDARD.encode(&raw);
        let url_safe = URL_SAFE_NO_PAD.encode(&raw);

        let a: Value = decode_jwt_payload(&token_with(&standard)).unwrap();
        let b: Value = decode_jwt_payload(&token_with(&url_safe)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["note"], "??>");
    }

    #[test]
    fn missing_payload() {
        assert!(matches!(
            decode_jwt_payload::<Value>("header-only"),
            Err(JwtError::MissingPayload)
        ));
        assert!(matches!(
            decode_jwt_payload::<Value>("header..sig"),
            Err(JwtError::MissingPayload)
        ));
        assert!(matches!(decode_jwt_payload::<Value>(""), Err(JwtError::MissingPayload)));
    }

    #[test]
    fn bad_base64_and_bad_json() {
        assert!(matches!(
            decode_jwt_payload::<Value>(&token_with("!!!")),
            Err(JwtError::Base64(_))
        ));
        let not_json = URL_SAFE_NO_PAD.encode("plain text");
        assert!(matches!(
            decode_jwt_payload::<Value>(&token_with(&not_json)),
            Err(JwtError::Json(_))
        ));
    }

    #[test]
    fn parse_jwt_swallows_errors() {
        assert!(parse_jwt::<Claims>("a.b.c").is_none());
        let wrong_shape = URL_SAFE_NO_PAD.encode(r#"{"sub":"not a number"}"#);
        assert!(parse_jwt::<Claims>(&token_with(&wrong_shape)).is_none());
    }
}
