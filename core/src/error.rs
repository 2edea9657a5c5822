//! Error types for the Freelancer API client.
//!
//! # Design
//! The client does not interpret HTTP status codes: error payloads are
//! parsed like any other body and usually just lack a `result`. What is
//! left are failures to get a body at all (`TransportError`) and bodies
//! that are not a JSON object (`DeserializationError`). Both carry the
//! underlying message.

use std::fmt;

/// Errors returned by `FreelancerClient` and `Transport` implementations.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response body: DNS, connect, timeout,
    /// or a failure while reading the body.
    TransportError(String),

    /// The response body was not a JSON object.
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::TransportError(msg) => write!(f, "transport failed: {msg}"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = ApiError::TransportError("connection refused".to_string());
        assert_eq!(err.to_string(), "transport failed: connection refused");

        let err = ApiError::DeserializationError("expected value at line 1".to_string());
        assert_eq!(
            err.to_string(),
            "deserialization failed: expected value at line 1"
        );
    }
}
