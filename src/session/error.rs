//! Error types for generation sessions.

use thiserror::Error;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that abort a generation.
///
/// Per-line protocol parse issues never surface here; the decoder
/// absorbs them. Cancellation is not an error either.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The service answered with a non-success status.
    #[error("HTTP error: {status} - {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Human-readable detail, preferring the service's own message.
        message: String,
    },

    /// The connection failed or broke mid-stream.
    #[error("connection failed: {0}")]
    Connection(#[from] std::io::Error),

    /// A fully completed stream yielded zero content.
    #[error("model stream completed without content")]
    EmptyCompletion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        let err = SessionError::Http {
            status: 429,
            message: "rate limited".to_owned(),
        };
        assert_eq!(err.to_string(), "HTTP error: 429 - rate limited");
        assert_eq!(
            SessionError::EmptyCompletion.to_string(),
            "model stream completed without content"
        );
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = SessionError::from(io);
        assert!(matches!(err, SessionError::Connection(_)));
    }
}
