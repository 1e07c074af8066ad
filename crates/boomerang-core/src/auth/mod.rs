//! Authentication types and session management.
//!
//! This module provides the client-side session primitives. All liveness
//! queries go through a [`SessionStore`].

mod config;
mod session;
mod token;

pub use config::{AuthConfig, auth_config};
pub use session::{InitOutcome, JWT_COOKIE, Session, SessionStore, TOKEN_KEY, USERNAME_KEY};
pub use token::{Claims, Jwt, decode_claims};
