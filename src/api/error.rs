use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, timeout, TLS, and other transport failures.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response whose body was not a JSON envelope.
    #[error("backend returned HTTP {status}")]
    Status { status: u16, body: String },

    /// Envelope with `success: false`; carries the server's `error` text (may be empty).
    #[error("backend rejected the request: {0}")]
    Rejected(String),

    /// 2xx response whose body or `data` did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Envelope with `success: true` but no `data` field.
    #[error("response carried no data")]
    MissingData,
}

impl ApiError {
    /// Message from the server, when it sent a non-empty one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(msg) if !msg.trim().is_empty() => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Toast text for a failed action.
    ///
    /// Prefers the server's message; a rejected call without one uses
    /// `fallback`, and anything that never produced an envelope is reported
    /// as a network error.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(_) => self
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            ApiError::MissingData => fallback.to_string(),
            _ => t!("toast.network_error").to_string(),
        }
    }
}
