use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Booking,
    System,
    Promotion,
}

impl NotificationKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "booking" => NotificationKind::Booking,
            "promotion" => NotificationKind::Promotion,
            _ => NotificationKind::System,
        }
    }
}

/// One row from `GET /api/notifications`. The backend sends ids as numbers
/// or strings depending on version; both normalize to a string.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Notification {
    #[serde(deserialize_with = "crate::models::response::deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub title: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        NotificationKind::parse(&self.kind)
    }

    pub fn is_read(&self) -> bool {
        self.status.eq_ignore_ascii_case("read")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_string_ids() {
        let numeric: Notification = serde_json::from_value(json!({
            "id": 12,
            "title": "Booking approved",
            "message": "See you on June 10!",
            "type": "booking",
            "status": "unread"
        }))
        .unwrap();
        assert_eq!(numeric.id, "12");
        assert_eq!(numeric.kind(), NotificationKind::Booking);
        assert!(!numeric.is_read());

        let text: Notification = serde_json::from_value(json!({
            "id": "n-7",
            "title": "Summer promo",
            "message": "20% off cottages",
            "type": "promotion",
            "status": "Read"
        }))
        .unwrap();
        assert_eq!(text.id, "n-7");
        assert_eq!(text.kind(), NotificationKind::Promotion);
        assert!(text.is_read());
    }

    #[test]
    fn test_unknown_kind_falls_back_to_system() {
        let note: Notification = serde_json::from_value(json!({
            "id": 1,
            "title": "Maintenance window",
            "message": "Portal down tonight",
            "type": "ops"
        }))
        .unwrap();
        assert_eq!(note.kind(), NotificationKind::System);
    }
}
