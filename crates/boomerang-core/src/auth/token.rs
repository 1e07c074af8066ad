//! Compact claims tokens and their decoded payload.
//!
//! Tokens are decoded without verifying the signature. The payload is only
//! used to learn who the session belongs to and when it stops being live.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::TokenError;

/// A compact claims token (`header.payload.signature`).
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - The signature is not checked; claims are informational only
#[derive(Clone, PartialEq, Eq)]
pub struct Jwt(String);

impl Jwt {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for storage or authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the payload segment into [`Claims`].
    pub fn decode(&self) -> Result<Claims, TokenError> {
        decode_claims(&self.0)
    }
}

// Hide token value in Debug output
impl fmt::Debug for Jwt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Jwt").field(&"[REDACTED]").finish()
    }
}

/// The decoded payload of a [`Jwt`].
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    fields: Map<String, Value>,
}

impl Claims {
    fn from_map(fields: Map<String, Value>) -> Result<Self, TokenError> {
        if let Some(exp) = fields.get("exp")
            && !exp.is_number()
        {
            return Err(TokenError::Json {
                message: format!("'exp' must be a number, found {}", exp),
            });
        }
        Ok(Self { fields })
    }

    /// The `username` claim.
    pub fn username(&self) -> Option<&str> {
        self.fields.get("username").and_then(Value::as_str)
    }

    /// The `username` claim, or an error naming the missing claim.
    pub fn require_username(&self) -> Result<&str, TokenError> {
        self.username()
            .ok_or(TokenError::MissingClaim { claim: "username" })
    }

    /// The raw `exp` claim in seconds since the epoch.
    pub fn exp(&self) -> Option<f64> {
        self.fields.get("exp").and_then(Value::as_f64)
    }

    /// The `user_id` claim.
    pub fn user_id(&self) -> Option<i64> {
        self.fields.get("user_id").and_then(Value::as_i64)
    }

    /// The `email` claim.
    pub fn email(&self) -> Option<&str> {
        self.fields.get("email").and_then(Value::as_str)
    }

    /// Look up any claim by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The expiry as a timestamp, if the token carries one that fits in a
    /// `DateTime`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.exp()?;
        let secs = exp.floor();
        let nanos = ((exp - secs) * 1e9) as u32;
        DateTime::from_timestamp(secs as i64, nanos)
    }

    /// True iff the token carries an expiry and it is at or before
    /// `now + leeway_secs`. Tokens without `exp` never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>, leeway_secs: i64) -> bool {
        let Some(exp) = self.exp() else {
            return false;
        };
        let now = now.timestamp() as f64
            + f64::from(now.timestamp_subsec_nanos()) / 1e9
            + leeway_secs as f64;
        exp <= now
    }
}

/// Decode the claims of a compact token without verifying it.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Malformed { parts: parts.len() });
    }

    // Padding is optional in base64url
    let payload = parts[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| TokenError::Base64 {
            message: e.to_string(),
        })?;

    let fields: Map<String, Value> =
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Json {
            message: e.to_string(),
        })?;

    Claims::from_map(fields)
}
