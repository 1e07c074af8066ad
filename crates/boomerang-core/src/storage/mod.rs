//! Durable key-value storage and cookie jar abstractions.
//!
//! The session store never touches process-global state directly; it is
//! handed a [`Storage`] and a [`CookieJar`] so tests can use the in-memory
//! backends and the CLI can use the file-backed ones.

mod file;
mod memory;

pub use file::{FileCookieJar, FileStorage};
pub use memory::{MemoryCookieJar, MemoryStorage};

use crate::Result;

/// Durable string key-value storage surviving restarts.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Cookies delivered by an external login flow.
pub trait CookieJar: Send + Sync {
    /// Read the cookie called `name`.
    fn get(&self, name: &str) -> Result<Option<String>>;

    /// Delete the cookie called `name`. Deleting an absent cookie is not an
    /// error.
    fn remove(&self, name: &str) -> Result<()>;
}

/// Parse a `Cookie` request header (`a=1; b=2`) into name/value pairs.
///
/// Pieces without `=` are skipped and surrounding double quotes are stripped
/// from values.
pub fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cookie_header_pairs() {
        let pairs = parse_cookie_header("jwt=abc.def.ghi; csrftoken=\"xyz\";  flag ; =orphan");
        assert_eq!(
            pairs,
            vec![
                ("jwt".to_string(), "abc.def.ghi".to_string()),
                ("csrftoken".to_string(), "xyz".to_string()),
            ]
        );
    }

    #[test]
    fn empty_header_has_no_cookies() {
        assert!(parse_cookie_header("").is_empty());
    }
}
