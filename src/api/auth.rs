use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

/// Token issued on login/registration. Field name varies by backend
/// version.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(alias = "auth_token", alias = "access_token")]
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
    client.post("/api/login", credentials).await
}

pub async fn register(client: &ApiClient, input: &SignupInput) -> Result<TokenResponse, ApiError> {
    client.post("/api/register", input).await
}

/// Invalidates the token server-side. The caller still clears its session.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    let _: Value = client.post("/api/logout", &serde_json::json!({})).await?;
    Ok(())
}
