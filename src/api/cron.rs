//! Scheduled check-in tasks.

use serde::{Deserialize, Serialize};

use crate::net::{ApiClient, ApiError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CronTask {
    pub id: i64,
    pub name: String,
    pub cron_expr: String,
    pub task_type: String,
    /// Comma-separated account IDs the task covers.
    pub account_ids: String,
    pub status: i64,
    pub last_run: Option<String>,
    pub next_run: Option<String>,
}

/// Partial task payload for create and update. Unset fields are omitted
/// from the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CronTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
}

/// `GET /cron`
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get_cron_tasks(client: &ApiClient) -> Result<Vec<CronTask>, ApiError> {
    client.get("/cron").await
}

/// `POST /cron`
///
/// # Errors
///
/// See [`ApiError`].
pub async fn create_cron_task(
    client: &ApiClient,
    input: &CronTaskInput,
) -> Result<CronTask, ApiError> {
    client.post("/cron", input).await
}

/// `PUT /cron/{id}`
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update_cron_task(
    client: &ApiClient,
    id: i64,
    input: &CronTaskInput,
) -> Result<CronTask, ApiError> {
    client.put(&format!("/cron/{id}"), input).await
}

/// `DELETE /cron/{id}`
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_cron_task(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/cron/{id}")).await
}

/// `POST /cron/{id}/trigger` — run a scheduled task immediately.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn trigger_cron_task(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.post_empty(&format!("/cron/{id}/trigger")).await
}

#[cfg(test)]
#[path = "cron_test.rs"]
mod tests;
