//! Managed check-in accounts.

use serde::{Deserialize, Serialize};

use crate::net::{ApiClient, ApiError};

/// A managed account and its latest check-in outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub username: String,
    pub role: i64,
    pub status: i64,
    pub last_checkin: Option<String>,
    pub last_result: Option<String>,
}

/// Upstream session details resolved during verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_id: i64,
    pub username: String,
    pub role: i64,
    pub status: i64,
    pub group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinResult {
    pub success: bool,
    pub result: String,
}

/// `GET /accounts`
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get_accounts(client: &ApiClient) -> Result<Vec<Account>, ApiError> {
    client.get("/accounts").await
}

/// `POST /accounts` — register an account under the given display name with
/// its upstream session string.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn create_account(
    client: &ApiClient,
    name: &str,
    session: &str,
) -> Result<Account, ApiError> {
    let body = serde_json::json!({ "name": name, "session": session });
    client.post("/accounts", &body).await
}

/// `PUT /accounts/{id}`
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update_account(
    client: &ApiClient,
    id: i64,
    name: &str,
    session: &str,
) -> Result<Account, ApiError> {
    let body = serde_json::json!({ "name": name, "session": session });
    client.put(&format!("/accounts/{id}"), &body).await
}

/// `DELETE /accounts/{id}`
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_account(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/accounts/{id}")).await
}

/// `POST /accounts/{id}/checkin` — run a check-in for one account now.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn checkin_account(client: &ApiClient, id: i64) -> Result<CheckinResult, ApiError> {
    client.post_empty(&format!("/accounts/{id}/checkin")).await
}

/// `POST /accounts/verify` — validate an upstream session string without
/// creating an account.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn verify_session(client: &ApiClient, session: &str) -> Result<SessionInfo, ApiError> {
    let body = serde_json::json!({ "session": session });
    client.post("/accounts/verify", &body).await
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
