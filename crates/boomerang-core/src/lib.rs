//! boomerang-core - client session and navigation shell.
//!
//! The library owns the client-side authentication session for the boomerang
//! notebook service. A claims token delivered once through the `jwt` cookie is
//! decoded, committed to durable storage, and queried lazily for liveness.
//!
//! # Example
//!
//! ```
//! use boomerang_core::{MemoryCookieJar, MemoryStorage, SessionStore};
//!
//! let store = SessionStore::new(MemoryStorage::new(), MemoryCookieJar::new());
//! store.init().unwrap();
//! assert!(!store.is_logged_in());
//! ```

pub mod auth;
pub mod error;
pub mod http;
pub mod shell;
pub mod storage;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AuthConfig, Claims, InitOutcome, Jwt, Session, SessionStore, auth_config};
pub use error::Error;
pub use http::{AuthHttp, TokenSource};
pub use shell::{Navbar, Route, Shell, StartupNotice};
pub use storage::{
    CookieJar, FileCookieJar, FileStorage, MemoryCookieJar, MemoryStorage, Storage,
};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
