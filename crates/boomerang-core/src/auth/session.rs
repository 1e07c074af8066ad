//! Client-side session store.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::error::TokenError;
use crate::storage::{CookieJar, Storage};

use super::token::{Claims, Jwt};

/// Cookie the external login flow delivers the token in.
pub const JWT_COOKIE: &str = "jwt";

/// Durable storage key holding the username.
pub const USERNAME_KEY: &str = "username";

/// Durable storage key holding the raw token.
pub const TOKEN_KEY: &str = "token";

/// A committed session as found in durable storage.
///
/// The session may be stale: the token is kept after it expires until
/// [`SessionStore::logout`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: Jwt,
}

/// What [`SessionStore::init`] did with the startup cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// No `jwt` cookie (or an empty one) was delivered.
    NoCookie,
    /// The cookie held a decodable token and the session was committed.
    LoggedIn { username: String },
    /// The cookie could not be decoded; storage was left untouched.
    Rejected(TokenError),
}

/// Owns the client-side authentication session.
///
/// The token arrives once through the `jwt` cookie, is decoded for its
/// `username` claim and then lives in durable storage. Liveness is checked
/// lazily against the token's `exp` claim on every query; nothing runs in
/// the background.
///
/// # Example
///
/// ```
/// use boomerang_core::{MemoryCookieJar, MemoryStorage, SessionStore};
///
/// let store = SessionStore::new(MemoryStorage::new(), MemoryCookieJar::new());
/// store.logout().unwrap();
/// assert!(!store.is_logged_in());
/// ```
#[derive(Debug)]
pub struct SessionStore<S, C> {
    storage: S,
    cookies: C,
}

impl<S: Storage, C: CookieJar> SessionStore<S, C> {
    pub fn new(storage: S, cookies: C) -> Self {
        Self { storage, cookies }
    }

    /// The durable storage backing this store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The cookie jar the startup token is read from.
    pub fn cookies(&self) -> &C {
        &self.cookies
    }

    /// Consume the `jwt` cookie and commit its session.
    ///
    /// The cookie is deleted whether or not it decoded. A token that cannot
    /// be decoded is reported as [`InitOutcome::Rejected`] rather than an
    /// error so startup can continue; only storage failures are errors.
    #[instrument(skip(self))]
    pub fn init(&self) -> Result<InitOutcome> {
        let cookie = self.cookies.get(JWT_COOKIE)?;

        let outcome = match cookie.as_deref() {
            None | Some("") => {
                debug!("No startup cookie");
                InitOutcome::NoCookie
            }
            Some(token) => match self.login(token) {
                Ok(session) => InitOutcome::LoggedIn {
                    username: session.username,
                },
                Err(crate::Error::Token(err)) => {
                    warn!(error = %err, "Discarding undecodable startup cookie");
                    InitOutcome::Rejected(err)
                }
                Err(err) => {
                    // Still consume the cookie before surfacing the failure
                    self.cookies.remove(JWT_COOKIE)?;
                    return Err(err);
                }
            },
        };

        self.cookies.remove(JWT_COOKIE)?;
        Ok(outcome)
    }

    /// Decode `token` and store it with its `username` claim, replacing any
    /// previous session.
    ///
    /// The signature is not verified. Nothing is written if the token does
    /// not decode or carries no `username`.
    #[instrument(skip(self, token))]
    pub fn login(&self, token: &str) -> Result<Session> {
        let token = Jwt::new(token);
        let claims = token.decode()?;
        let username = claims.require_username()?.to_string();

        self.storage.set(USERNAME_KEY, &username)?;
        self.storage.set(TOKEN_KEY, token.as_str())?;

        info!(%username, expires_at = ?claims.expires_at(), "Session committed");
        Ok(Session { username, token })
    }

    /// Forget the session. Safe to call when logged out.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<()> {
        self.storage.remove(USERNAME_KEY)?;
        self.storage.remove(TOKEN_KEY)?;
        debug!("Session cleared");
        Ok(())
    }

    /// True iff a token is stored and its expiry has not passed.
    ///
    /// Absent, malformed and expired tokens all read as logged out.
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in_at(Utc::now())
    }

    /// [`SessionStore::is_logged_in`] evaluated at `now`.
    pub fn is_logged_in_at(&self, now: DateTime<Utc>) -> bool {
        match self.stored_claims() {
            Ok(Some(claims)) => !claims.is_expired_at(now, 0),
            Ok(None) => false,
            Err(err) => {
                debug!(error = %err, "Stored token is unusable");
                false
            }
        }
    }

    /// The stored token, if it is still live.
    pub fn live_token(&self) -> Option<Jwt> {
        let token = self.storage.get(TOKEN_KEY).ok().flatten()?;
        let token = Jwt::new(token);
        match token.decode() {
            Ok(claims) if !claims.is_expired_at(Utc::now(), 0) => Some(token),
            _ => None,
        }
    }

    /// The stored session, live or stale.
    pub fn session(&self) -> Result<Option<Session>> {
        let username = self.storage.get(USERNAME_KEY)?;
        let token = self.storage.get(TOKEN_KEY)?;
        Ok(match (username, token) {
            (Some(username), Some(token)) => Some(Session {
                username,
                token: Jwt::new(token),
            }),
            _ => None,
        })
    }

    /// Expiry of the stored token, if it carries one.
    pub fn token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.stored_claims().ok().flatten()?.expires_at()
    }

    fn stored_claims(&self) -> Result<Option<Claims>> {
        match self.storage.get(TOKEN_KEY) {
            Ok(Some(token)) => Ok(Some(Jwt::new(token).decode()?)),
            Ok(None) => Ok(None),
            Err(err) => {
                warn!(error = %err, "Failed to read stored token");
                Err(err)
            }
        }
    }
}
