//! Errors raised by the GraphQL transport.

use board::BoardError;
use thiserror::Error;

/// Failure of a single GraphQL request.
#[derive(Debug, Error)]
pub enum GraphQlError {
    /// The HTTP client could not be built or the request could not be sent.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The access token cannot be used as an HTTP header value.
    #[error("Access token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    /// The endpoint answered with a non-success status.
    #[error("GraphQL endpoint returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: reqwest::StatusCode,
        /// Response body, as text, for diagnostics.
        body: String,
    },

    /// The response carried a non-empty `errors` array.
    #[error("GraphQL errors: {}", .messages.join(", "))]
    GraphQl {
        /// The `message` of every reported error, in order.
        messages: Vec<String>,
    },

    /// The response had neither `errors` nor `data`.
    #[error("GraphQL response contained no data")]
    MissingData,

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GraphQlError {
    /// Converts the error into the domain error for the named protocol step.
    pub fn into_board_error(self, operation: &str) -> BoardError {
        BoardError::Remote {
            operation: operation.to_string(),
            message: self.to_string(),
        }
    }
}
