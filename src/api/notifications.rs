use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::models::notification::Notification;
use crate::models::response::ListPayload;

pub async fn list_notifications(client: &ApiClient) -> Result<Vec<Notification>, ApiError> {
    let payload: ListPayload<Notification> = client.get("/api/notifications").await?;
    Ok(payload.into_items())
}

pub async fn mark_read(client: &ApiClient, notification_id: &str) -> Result<(), ApiError> {
    let path = format!("/api/notifications/{}/read", notification_id);
    let _: Value = client.patch(&path, &serde_json::json!({})).await?;
    Ok(())
}

pub async fn mark_all_read(client: &ApiClient) -> Result<(), ApiError> {
    let _: Value = client
        .patch("/api/notifications/mark-all-read", &serde_json::json!({}))
        .await?;
    Ok(())
}
