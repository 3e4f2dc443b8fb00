//! Authentication endpoints.

use serde::{Deserialize, Serialize};

use crate::net::{ApiClient, ApiError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub username: String,
}

/// `POST /auth/login` — exchange credentials for a session token. The
/// caller is responsible for storing the token in the session.
///
/// # Errors
///
/// Rejects with the server's message on bad credentials.
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let body = serde_json::json!({ "username": username, "password": password });
    client.post("/auth/login", &body).await
}

/// `GET /auth/profile` — current user's profile.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get_profile(client: &ApiClient) -> Result<ProfileResponse, ApiError> {
    client.get("/auth/profile").await
}

/// `PUT /auth/password` — change the current user's password.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn change_password(
    client: &ApiClient,
    old_password: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    let body = serde_json::json!({
        "old_password": old_password,
        "new_password": new_password,
    });
    client.put("/auth/password", &body).await
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
