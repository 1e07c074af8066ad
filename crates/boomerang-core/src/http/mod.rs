//! Authenticated access to the boomerang REST API.

mod client;

pub use client::{AuthHttp, TokenSource};
