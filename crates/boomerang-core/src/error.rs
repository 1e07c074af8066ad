//! Error types for boomerang-core.
//!
//! A single error type with explicit variants for token decoding,
//! authentication, storage, transport, protocol and input validation failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for boomerang-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The claims token could not be decoded.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// Authentication errors (no token, expired token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Durable storage or cookie jar failures.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-success responses from the API.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Failures while decoding a compact claims token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token does not have exactly three dot-separated parts.
    #[error("token must have 3 parts, found {parts}")]
    Malformed { parts: usize },

    /// The payload segment is not valid base64url.
    #[error("cannot decode the token payload: {message}")]
    Base64 { message: String },

    /// The payload is not a JSON object.
    #[error("token payload is not a JSON object: {message}")]
    Json { message: String },

    /// A required claim is absent or has the wrong type.
    #[error("token is missing the '{claim}' claim")]
    MissingClaim { claim: &'static str },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No token is stored, or the stored token has expired.
    #[error("no JWT present or has expired")]
    NoJwt,

    /// The stored token cannot be placed in an HTTP header.
    #[error("stored token contains characters not allowed in a header")]
    InvalidHeader,
}

/// Storage backend failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// The backing file does not contain a JSON object of strings.
    #[error("corrupt storage file {path}: {message}")]
    Corrupt { path: String, message: String },

    /// An in-memory lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A non-success response from the API.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// The `detail` message from the response body, if any.
    pub detail: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }

    /// Check if the server rejected our credentials.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}
