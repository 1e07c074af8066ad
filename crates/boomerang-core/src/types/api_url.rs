//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL of the boomerang REST API.
///
/// The URL must be absolute and use HTTPS (HTTP is allowed only for
/// localhost). Trailing slashes are dropped so endpoints join cleanly.
///
/// # Example
///
/// ```
/// use boomerang_core::ApiUrl;
///
/// let api = ApiUrl::new("https://boomerang.example/api/").unwrap();
/// assert_eq!(api.endpoint("notebooks/"), "https://boomerang.example/api/notebooks/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute or uses plain HTTP for a
    /// non-local host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        let mut normalized = url;
        let trimmed = normalized.path().trim_end_matches('/').to_string();
        normalized.set_path(&trimmed);
        normalized.set_query(None);
        normalized.set_fragment(None);

        Ok(Self(normalized))
    }

    /// Join an endpoint path onto the base, e.g. `notebooks/`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://boomerang.example/api").unwrap();
        assert_eq!(api.host(), Some("boomerang.example"));
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://localhost:8000/api").unwrap();
        assert_eq!(api.endpoint("tasks/"), "http://localhost:8000/api/tasks/");
    }

    #[test]
    fn normalizes_trailing_slash() {
        let api = ApiUrl::new("https://boomerang.example/api/").unwrap();
        assert_eq!(
            api.endpoint("/notebooks/"),
            "https://boomerang.example/api/notebooks/"
        );
    }

    #[test]
    fn root_url_joins_without_double_slash() {
        let api = ApiUrl::new("http://127.0.0.1:9000").unwrap();
        assert_eq!(api.endpoint("jwt/"), "http://127.0.0.1:9000/jwt/");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://boomerang.example").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/notebooks").is_err());
    }

    #[test]
    fn invalid_file_url() {
        assert!(ApiUrl::new("file:///tmp/api").is_err());
    }
}
