use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The `{ success, data }` wrapper most Villa Perez endpoints use.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: Option<bool>,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// List endpoints answer either with a bare JSON array or with the
/// `{ success, data: [...] }` envelope depending on backend version. Both
/// shapes normalize to a plain `Vec` here so no caller re-derives this.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Items(Vec<T>),
    Envelope(ApiEnvelope<Vec<T>>),
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Items(items) => items,
            ListPayload::Envelope(envelope) => envelope.data.unwrap_or_default(),
        }
    }
}

/// Single-record variant of [`ListPayload`]. The bare shape is tried first;
/// envelopes fail that branch because the record's required fields are
/// nested under `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemPayload<T> {
    Item(T),
    Envelope(ApiEnvelope<T>),
}

impl<T> ItemPayload<T> {
    pub fn into_item(self) -> Option<T> {
        match self {
            ItemPayload::Item(item) => Some(item),
            ItemPayload::Envelope(envelope) => envelope.data,
        }
    }
}

/// Deserialize an id the backend may send as a number or a string.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or numeric id, got {other}"
        ))),
    }
}

/// Optional variant of [`deserialize_id`]; null and missing become `None`.
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or numeric id, got {other}"
        ))),
    }
}
