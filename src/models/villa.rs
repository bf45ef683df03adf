use serde::{Deserialize, Serialize};

use crate::services::image_service::ImageService;

/// Wire shape of a bookable unit as the backend sends it. Field names have
/// drifted across backend versions (`price` vs `price_per_night`,
/// `maxGuests` vs `max_guests` vs `capacity`), so the aliases keep older
/// deployments readable.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VillaRecord {
    #[serde(alias = "rc_id")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "price_per_night", default)]
    pub price: u32,
    #[serde(alias = "image_url", default)]
    pub image: Option<String>,
    #[serde(rename = "maxGuests", alias = "max_guests", alias = "capacity", default)]
    pub max_guests: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum VillaKind {
    #[serde(rename = "room")]
    Room,
    #[serde(rename = "cottage")]
    Cottage,
    #[serde(rename = "party-space")]
    PartySpace,
}

impl VillaKind {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("cottage") => VillaKind::Cottage,
            Some("party-space") => VillaKind::PartySpace,
            _ => VillaKind::Room,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum VillaStatus {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "booked")]
    Booked,
    #[serde(rename = "maintenance")]
    Maintenance,
}

impl VillaStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("booked") => VillaStatus::Booked,
            Some("maintenance") => VillaStatus::Maintenance,
            _ => VillaStatus::Available,
        }
    }
}

/// Normalized bookable unit held by the views for the lifetime of a page.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Villa {
    pub id: String,
    pub rc_id: i64,
    pub name: String,
    pub kind: VillaKind,
    pub description: String,
    /// Nightly price, whole currency units.
    pub price: u32,
    pub image_url: String,
    pub max_guests: u32,
    pub amenities: Vec<String>,
    pub status: VillaStatus,
}

impl Villa {
    /// The one place a backend villa record becomes an internal `Villa`.
    pub fn from_record(record: VillaRecord, api_base: &str) -> Self {
        Self {
            id: format!("villa-{}", record.id),
            rc_id: record.id,
            name: record.name,
            kind: VillaKind::parse(record.kind.as_deref()),
            description: record.description,
            price: record.price,
            image_url: ImageService::resolve(api_base, record.image.as_deref()),
            max_guests: record.max_guests,
            amenities: record.amenities,
            status: VillaStatus::parse(record.status.as_deref()),
        }
    }

    pub fn is_bookable(&self) -> bool {
        self.status == VillaStatus::Available
    }
}
