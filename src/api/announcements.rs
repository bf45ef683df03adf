use log::warn;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::models::announcement::Announcement;
use crate::models::response::ListPayload;

/// Public announcements. Sent without credentials so the backend only
/// returns entries meant for everyone.
pub async fn list_announcements(client: &ApiClient) -> Result<Vec<Announcement>, ApiError> {
    let payload: ListPayload<Announcement> = client.get_public("/api/announcements").await?;
    Ok(payload.into_items())
}

/// Landing-page variant: an error just means nothing to show.
pub async fn list_announcements_or_empty(client: &ApiClient) -> Vec<Announcement> {
    match list_announcements(client).await {
        Ok(announcements) => announcements,
        Err(err) => {
            warn!("announcement fetch failed: {}", err);
            Vec::new()
        }
    }
}
