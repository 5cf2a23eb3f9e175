use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("vision endpoint rejected the credential or model id")]
    Unauthorized,

    #[error("vision endpoint did not answer within the timeout")]
    Timeout,

    #[error("vision endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("malformed model reply: {0}")]
    MalformedResponse(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("upload storage error: {0}")]
    Storage(String),

    #[error("internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Failure classes that degrade to the demonstration result instead of
    /// failing the request.
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            CoreError::Unauthorized | CoreError::Timeout | CoreError::Unreachable(_)
        )
    }
}
