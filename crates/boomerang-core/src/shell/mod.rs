//! Navigation shell.
//!
//! A thin text rendering of the application frame: a title, links to the two
//! views, the navbar and the outlet of the active view. The shell keeps no
//! session state of its own; it asks the [`SessionStore`] on every render.

mod navbar;
mod route;

pub use navbar::Navbar;
pub use route::Route;

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::Result;
use crate::auth::{InitOutcome, SessionStore};
use crate::error::TokenError;
use crate::storage::{CookieJar, Storage};

/// A visible, non-fatal message produced during startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupNotice {
    pub message: String,
    pub cause: TokenError,
}

/// The application frame.
#[derive(Debug)]
pub struct Shell<S, C> {
    store: Arc<SessionStore<S, C>>,
    active: Option<Route>,
    version: String,
    notice: Option<StartupNotice>,
}

impl<S: Storage, C: CookieJar> Shell<S, C> {
    /// Start the application: run the session store's `init` exactly once.
    ///
    /// No default navigation happens; the outlet stays empty until
    /// [`Shell::navigate`] is called. A rejected cookie becomes a
    /// [`StartupNotice`] instead of aborting startup.
    #[instrument(skip(store))]
    pub fn start(store: Arc<SessionStore<S, C>>) -> Result<Self> {
        let notice = match store.init()? {
            InitOutcome::Rejected(cause) => {
                warn!(error = %cause, "Startup cookie rejected");
                Some(StartupNotice {
                    message: format!("Could not sign you in: {}", cause),
                    cause,
                })
            }
            InitOutcome::LoggedIn { username } => {
                info!(%username, "Signed in from startup cookie");
                None
            }
            InitOutcome::NoCookie => None,
        };

        Ok(Self {
            store,
            active: None,
            version: env!("CARGO_PKG_VERSION").to_string(),
            notice,
        })
    }

    /// Override the version shown in the title.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// The session store the shell renders from.
    pub fn store(&self) -> &Arc<SessionStore<S, C>> {
        &self.store
    }

    /// The startup notice, if init rejected the cookie.
    pub fn notice(&self) -> Option<&StartupNotice> {
        self.notice.as_ref()
    }

    /// The view currently in the outlet.
    pub fn active(&self) -> Option<Route> {
        self.active
    }

    /// Navigate to `path`. Unmatched paths leave the active view unchanged
    /// and return `None`.
    pub fn navigate(&mut self, path: &str) -> Option<Route> {
        let route = Route::resolve(path)?;
        self.active = Some(route);
        Some(route)
    }

    /// Render the frame as text. The navbar is rebuilt on every call.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Boomerang {}", self.version);
        if let Some(ref notice) = self.notice {
            let _ = writeln!(out, "! {}", notice.message);
        }
        for route in Route::ALL {
            let marker = if self.active == Some(route) { '*' } else { ' ' };
            let _ = writeln!(out, "{} {} ({})", marker, route.title(), route.path());
        }
        let _ = writeln!(out, "{}", Navbar::render(self.store.as_ref()));
        match self.active {
            Some(route) => {
                let _ = write!(out, "[{}]", route);
            }
            None => out.push_str("[]"),
        }
        out
    }
}
