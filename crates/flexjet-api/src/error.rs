//! Network error taxonomy.

use thiserror::Error;

/// Every way an API request can fail.
///
/// No raw transport or parsing error crosses the client boundary; each is
/// re-expressed as one of these kinds. Show users [`user_facing_message`],
/// never the `Display` output.
///
/// [`user_facing_message`]: NetworkError::user_facing_message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The request could not be built (bad URL, unserializable body)
    #[error("Invalid request")]
    InvalidRequest,

    /// The endpoint needs a token and none is stored
    #[error("Not signed in")]
    Unauthenticated,

    /// No response was obtained (DNS, connection refused, timeout)
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// 401 not caused by token expiry
    #[error("Unauthorized")]
    Unauthorized,

    /// 401 whose error message mentions expiry
    #[error("Token expired")]
    TokenExpired,

    /// A success body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    DecodingFailed(String),

    /// Any other non-2xx status
    #[error("Server error (status {status})")]
    ServerError { status: u16, message: Option<String> },

    /// The response was not a well-formed HTTP response
    #[error("Unknown response")]
    Unknown,
}

impl NetworkError {
    /// Whether the caller should send the user back to sign-in.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, NetworkError::Unauthorized | NetworkError::TokenExpired)
    }

    /// Message suitable for showing to the user.
    pub fn user_facing_message(&self) -> String {
        match self {
            NetworkError::InvalidRequest => "Invalid request URL.".to_string(),
            NetworkError::Unauthenticated => "Please sign in to continue.".to_string(),
            NetworkError::TransportFailure(detail) => format!("Network error: {}", detail),
            NetworkError::Unauthorized => "Invalid credentials. Please try again.".to_string(),
            NetworkError::TokenExpired => {
                "Your session has expired. Please sign in again.".to_string()
            }
            NetworkError::DecodingFailed(_) => "Failed to process server response.".to_string(),
            NetworkError::ServerError {
                message: Some(message),
                ..
            } => message.clone(),
            NetworkError::ServerError {
                status,
                message: None,
            } => format!(
                "Server error (code: {}). Please try again later.",
                status
            ),
            NetworkError::Unknown => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}

/// Result type alias using NetworkError.
pub type NetworkResult<T> = Result<T, NetworkError>;
