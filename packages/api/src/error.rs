use thiserror::Error;

use crate::result::Rejection;

/// Why a request to the auth API did not produce a usable body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
        server_message: Option<String>,
    },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// The server's verdict, when the failure was an HTTP error status.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ApiError::Status {
                status,
                server_message,
            } => Some(Rejection {
                status: *status,
                message: server_message.clone(),
            }),
            _ => None,
        }
    }
}
