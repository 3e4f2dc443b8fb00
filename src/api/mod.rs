//! Typed per-resource wrappers over the request pipeline.
//!
//! Mechanical data marshaling only: each function builds a path and a body
//! and lets [`crate::net::ApiClient`] handle credentials and the response
//! envelope. Nothing here ever sees a raw envelope or an HTTP status.

pub mod account;
pub mod auth;
pub mod cron;
pub mod system;
