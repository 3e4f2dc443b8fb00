//! System configuration, notification test, and check-in logs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::net::{ApiClient, ApiError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramTestResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinLog {
    pub id: i64,
    pub account_id: i64,
    pub success: bool,
    pub message: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinLogSummary {
    pub logs: Vec<CheckinLog>,
    pub today_checkin_account_count: i64,
}

/// `GET /config/{category}` — key-value settings for one category.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get_configs(
    client: &ApiClient,
    category: &str,
) -> Result<HashMap<String, String>, ApiError> {
    client.get(&format!("/config/{category}")).await
}

/// `PUT /config/{category}` — replace settings for one category.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update_configs(
    client: &ApiClient,
    category: &str,
    values: &HashMap<String, String>,
) -> Result<(), ApiError> {
    client.put(&format!("/config/{category}"), values).await
}

/// `POST /config/telegram/test` — send a test notification.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn test_telegram(client: &ApiClient) -> Result<TelegramTestResponse, ApiError> {
    client.post_empty("/config/telegram/test").await
}

/// `GET /logs` — recent check-in logs plus today's distinct-account count.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get_logs(client: &ApiClient) -> Result<CheckinLogSummary, ApiError> {
    client.get("/logs").await
}

#[cfg(test)]
#[path = "system_test.rs"]
mod tests;
