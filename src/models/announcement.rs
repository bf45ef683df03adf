use serde::{Deserialize, Serialize};

/// A public announcement shown on the landing page. Fetched without
/// credentials so the backend only returns active entries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}
