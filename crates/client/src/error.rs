/// Errors from calling the inventory RPC endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connect, timeout, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status and an error body.
    #[error("{code} ({status}): {message}")]
    Rpc {
        status: u16,
        /// Machine-readable code such as `NOT_FOUND` or `VALIDATION_ERROR`.
        code: String,
        message: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// The server's error code, if the server produced one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Rpc { code, .. } => Some(code),
            _ => None,
        }
    }
}
