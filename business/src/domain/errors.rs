/// Gateway errors for the domain layer.
///
/// Transport failures, non-success statuses, backend-reported errors and
/// missing records all end up here. Each variant renders as a single
/// human-readable message so callers can surface it verbatim.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("API Error: {0}")]
    Transport(String),
    #[error("API Error: {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("API Error: {0}")]
    Backend(String),
    #[error("API Error: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn transport(message: impl Into<String>) -> Self {
        GatewayError::Transport(message.into())
    }
    pub fn status(status: u16, reason: impl Into<String>) -> Self {
        GatewayError::Status {
            status,
            reason: reason.into(),
        }
    }
    pub fn backend(message: impl Into<String>) -> Self {
        GatewayError::Backend(message.into())
    }
    pub fn decode(message: impl Into<String>) -> Self {
        GatewayError::Decode(message.into())
    }
}
