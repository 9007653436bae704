use thiserror::Error;

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Token has no payload segment")]
    MissingPayload,

    #[error("Failed to base64-decode token payload")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to parse token payload as JSON")]
    Json(#[from] serde_json::Error),
}
