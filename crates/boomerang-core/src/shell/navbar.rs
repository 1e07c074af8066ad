//! Login-state indicator.

use std::fmt;

use crate::auth::SessionStore;
use crate::storage::{CookieJar, Storage};

/// The navbar as of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navbar {
    pub logged_in: bool,
}

impl Navbar {
    /// Query the store and build the navbar. Call on every render; the
    /// result is not cached.
    pub fn render<S: Storage, C: CookieJar>(store: &SessionStore<S, C>) -> Self {
        Self {
            logged_in: store.is_logged_in(),
        }
    }
}

impl fmt::Display for Navbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "navbar")?;
        if self.logged_in {
            write!(f, "\nlogged in")?;
        }
        Ok(())
    }
}
