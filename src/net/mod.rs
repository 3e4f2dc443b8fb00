//! The authenticated request pipeline.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
