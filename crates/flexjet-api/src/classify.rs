//! Status code classification.

use crate::{ApiErrorResponse, NetworkError, NetworkResult};

/// Map a response status and raw body to success or exactly one error kind.
///
/// The body is inspected for an `{"error": "..."}` message only on failure
/// statuses; an unparsable body there falls back to the default for that
/// status and is never reported as a decoding failure.
pub fn classify_response(status: u16, body: &[u8]) -> NetworkResult<()> {
    match status {
        200..=299 => Ok(()),
        401 => {
            let expired = error_message(body)
                .is_some_and(|message| message.to_lowercase().contains("expired"));
            if expired {
                Err(NetworkError::TokenExpired)
            } else {
                Err(NetworkError::Unauthorized)
            }
        }
        100..=599 => Err(NetworkError::ServerError {
            status,
            message: error_message(body),
        }),
        _ => Err(NetworkError::Unknown),
    }
}

fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ApiErrorResponse>(body)
        .ok()
        .map(|response| response.error)
}
