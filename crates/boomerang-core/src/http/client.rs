//! HTTP client that attaches the session token to API requests.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::Result;
use crate::auth::{AuthConfig, Jwt, SessionStore, auth_config};
use crate::error::{AuthError, Error, ProtocolError};
use crate::storage::{CookieJar, Storage};
use crate::types::ApiUrl;

/// Supplies the token for outbound requests.
pub trait TokenSource: Send + Sync {
    /// The stored token, if present and not expired.
    fn live_token(&self) -> Option<Jwt>;
}

impl<S: Storage, C: CookieJar> TokenSource for SessionStore<S, C> {
    fn live_token(&self) -> Option<Jwt> {
        SessionStore::live_token(self)
    }
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// HTTP client for authenticated API requests.
///
/// Every request carries `Authorization: JWT <token>` built from the
/// [`AuthConfig`]. When no live token is stored the request fails with
/// [`AuthError::NoJwt`], unless `no_jwt_error` is set, in which case it is
/// sent without credentials.
#[derive(Clone)]
pub struct AuthHttp {
    client: reqwest::Client,
    api: ApiUrl,
    tokens: Arc<dyn TokenSource>,
    config: AuthConfig,
}

impl AuthHttp {
    /// Create a client for `api` drawing tokens from `tokens`.
    pub fn new(api: ApiUrl, tokens: Arc<dyn TokenSource>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("boomerang/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api,
            tokens,
            config: auth_config(),
        })
    }

    /// Replace the authentication configuration.
    pub fn with_config(mut self, config: AuthConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the API URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Authenticated GET of a JSON resource.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.api.endpoint(path);
        debug!(%url, "Authenticated GET");

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Authenticated GET of a JSON resource with query parameters.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get_json_query<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + fmt::Debug + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "Authenticated GET");
        trace!(?query, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(query)
            .headers(self.auth_headers()?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Build the authorization headers for the next request.
    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        match self.tokens.live_token() {
            Some(token) => {
                let name = HeaderName::from_bytes(self.config.header_name.as_bytes())
                    .map_err(|_| AuthError::InvalidHeader)?;
                let value = HeaderValue::from_str(&self.config.header_value(token.as_str()))
                    .map_err(|_| AuthError::InvalidHeader)?;
                headers.insert(name, value);
            }
            None if self.config.no_jwt_error => {
                debug!("No live token, sending request unauthenticated");
            }
            None => return Err(AuthError::NoJwt.into()),
        }

        Ok(headers)
    }

    /// Parse a JSON body, or turn a non-success status into an error.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            Ok(response.json::<R>().await?)
        } else {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            Err(Error::Protocol(ProtocolError::new(status.as_u16(), detail)))
        }
    }
}

impl fmt::Debug for AuthHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHttp")
            .field("api", &self.api)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
