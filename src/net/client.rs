//! Request pipeline: credential injection and envelope unwrapping.
//!
//! ARCHITECTURE
//! ============
//! Every domain call goes through [`ApiClient::dispatch`]. Request phase:
//! attach the session token as a bearer credential when one is present —
//! a missing token is not an error here, authorization is enforced
//! server-side and by the navigation guard. Response phase: a 2xx body is a
//! `{ code, message, data }` envelope, unwrapped in one place
//! ([`unwrap_envelope`], pure for testability); a 401 clears the session
//! and redirects to login, in that order, before the error is returned;
//! any other failure propagates unchanged with no side effects.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::routes::Navigator;
use crate::session::SessionStore;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const FALLBACK_ERROR_MESSAGE: &str = "request failed";

// =============================================================================
// CLIENT
// =============================================================================

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<Navigator>,
}

impl ApiClient {
    /// Build a client rooted at `base_url`. Every call is bounded by a fixed
    /// 30 second timeout; a call that exceeds it surfaces as a transport
    /// failure rather than hanging.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        base_url: &str,
        session: Arc<SessionStore>,
        navigator: Arc<Navigator>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            session,
            navigator,
        })
    }

    /// `GET` a resource and unwrap its envelope.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the failure taxonomy.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.http.get(self.url(path))).await
    }

    /// `POST` a JSON body and unwrap the envelope.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.dispatch(self.http.post(self.url(path)).json(body)).await
    }

    /// `POST` without a body (trigger-style endpoints).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.http.post(self.url(path))).await
    }

    /// `PUT` a JSON body and unwrap the envelope.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.dispatch(self.http.put(self.url(path)).json(body)).await
    }

    /// `DELETE` a resource.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.http.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Request phase. Never blocks and never fails: no token simply means
    /// no header.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.session.token();
        if token.is_empty() { request } else { request.bearer_auth(token) }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Order matters: the session must be fully cleared (persisted
            // token included) before the redirect, so the guard never
            // observes a stale logged-in state. Both steps are idempotent,
            // so concurrent in-flight 401s collapse cleanly.
            tracing::warn!("401 from server, clearing session");
            self.session.logout();
            self.navigator.force_login();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let data = unwrap_envelope(&body)?;
        Ok(serde_json::from_value(data)?)
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// Uniform response envelope. `code == 0` means success and `data` is the
/// payload; anything else is a failure described by `message`. This type
/// never leaves the pipeline.
#[derive(serde::Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Interpret an envelope body: the payload on success, an
/// [`ApiError::Api`] carrying the server's message otherwise. An empty or
/// absent message falls back to a generic one so callers always have
/// something to show.
fn unwrap_envelope(body: &str) -> Result<serde_json::Value, ApiError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.code == 0 {
        return Ok(envelope.data);
    }
    let message = if envelope.message.is_empty() {
        FALLBACK_ERROR_MESSAGE.to_owned()
    } else {
        envelope.message
    };
    Err(ApiError::Api { code: envelope.code, message })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
