//! Failure taxonomy for the request pipeline.
//!
//! Three classes: application failures reported in the envelope (`Api`),
//! the authorization failure that also clears the session (`Unauthorized`),
//! and plain transport failures (`Transport`, `Status`). Every failure path
//! ends in a returned `Err`; the pipeline never swallows one.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure: connect error, timeout, aborted body read.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 401. The session has already been cleared and a
    /// redirect to the login view issued by the time callers see this.
    #[error("unauthorized")]
    Unauthorized,

    /// Non-401 status outside the success range.
    #[error("unexpected http status {0}")]
    Status(u16),

    /// Application-level failure reported in the response envelope
    /// (`code != 0`). Recoverable; no global side effect.
    #[error("{message}")]
    Api { code: i64, message: String },

    /// Response body was not a valid envelope or payload.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Envelope failure code, if this is an application-level failure.
    #[must_use]
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
