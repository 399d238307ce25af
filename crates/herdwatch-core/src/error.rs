//! Shared error type across herdwatch crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input (missing animal id, out-of-range window).
    BadRequest,
    /// Nothing stored for the requested animal.
    NotFound,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HerdError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum HerdError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl HerdError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HerdError::BadRequest(_) => ClientCode::BadRequest,
            HerdError::NotFound(_) => ClientCode::NotFound,
            HerdError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_codes_are_stable() {
        assert_eq!(HerdError::BadRequest("x".into()).client_code().as_str(), "BAD_REQUEST");
        assert_eq!(HerdError::NotFound("x".into()).client_code().as_str(), "NOT_FOUND");
        assert_eq!(HerdError::Internal("x".into()).client_code().as_str(), "INTERNAL");
    }
}
