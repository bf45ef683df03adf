use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::models::account::{AccountUpdate, User};
use crate::models::response::ItemPayload;

/// Profile of the customer the session token belongs to.
pub async fn current_user(client: &ApiClient) -> Result<User, ApiError> {
    let payload: ItemPayload<User> = client.get("/api/user").await?;
    payload
        .into_item()
        .ok_or_else(|| ApiError::Decode("user payload was empty".to_string()))
}

pub async fn update_account(
    client: &ApiClient,
    user_id: i64,
    update: &AccountUpdate,
) -> Result<User, ApiError> {
    let path = format!("/api/users/{}", user_id);
    let payload: ItemPayload<User> = client.patch(&path, update).await?;
    payload
        .into_item()
        .ok_or_else(|| ApiError::Decode("user payload was empty".to_string()))
}
