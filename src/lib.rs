//! Client-side session and request layer for the check-in admin console.
//!
//! ARCHITECTURE
//! ============
//! Three components, composed top-down at request time:
//!
//! - [`session::SessionStore`] — single authoritative holder of the
//!   authentication token and username, persisted through a
//!   [`storage::TokenStore`] backend.
//! - [`net::ApiClient`] — the request pipeline: attaches the token as a
//!   bearer credential, unwraps the backend's `{ code, message, data }`
//!   envelope, and reacts to a 401 by clearing the session and redirecting
//!   to the login route.
//! - [`routes`] — the static route table and the navigation guard that
//!   partitions views into a public region (login) and a protected region
//!   (everything else).
//!
//! The [`api`] modules are mechanical typed wrappers over the pipeline; they
//! never see a raw envelope.

pub mod api;
pub mod net;
pub mod routes;
pub mod session;
pub mod storage;
