use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::dates;
use crate::models::villa::Villa;
use crate::services::availability_service::AvailabilityService;

/// A field-level validation failure, keyed by the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Approved,
    Declined,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("approved") => BookingStatus::Approved,
            Some("declined") => BookingStatus::Declined,
            Some("cancelled") | Some("canceled") => BookingStatus::Cancelled,
            Some("completed") => BookingStatus::Completed,
            _ => BookingStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Feedback {
    pub id: i64,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A booking as returned by `GET /api/bookings`. Dates and ids come back in
/// whatever shape the backend row happens to have, so the lenient adapters
/// apply throughout.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Booking {
    #[serde(
        default,
        deserialize_with = "crate::models::response::deserialize_optional_id"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub rc_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default, with = "crate::models::dates::lenient_calendar_date")]
    pub check_in: Option<NaiveDate>,
    #[serde(default, with = "crate::models::dates::lenient_calendar_date")]
    pub check_out: Option<NaiveDate>,
    #[serde(default)]
    pub pax: u32,
    #[serde(default)]
    pub special_req: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub feedback: Option<Feedback>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Booking {
    pub fn status(&self) -> BookingStatus {
        BookingStatus::parse(self.status.as_deref())
    }

    /// Pending and approved bookings can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self.status(),
            BookingStatus::Pending | BookingStatus::Approved
        )
    }

    pub fn can_request_reschedule(&self) -> bool {
        matches!(
            self.status(),
            BookingStatus::Pending | BookingStatus::Approved
        )
    }

    /// Feedback is offered once a stay completed and none was left yet.
    pub fn can_leave_feedback(&self) -> bool {
        self.status() == BookingStatus::Completed && self.feedback.is_none()
    }
}

/// Payload assembled at submission time for `POST /api/bookings`. Never
/// stored; the backend owns the booking from here on.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingRequest {
    pub rc_id: i64,
    pub name: String,
    pub contact: String,
    #[serde(with = "crate::models::dates::calendar_date")]
    pub check_in: NaiveDate,
    #[serde(with = "crate::models::dates::calendar_date")]
    pub check_out: NaiveDate,
    pub pax: u32,
    pub special_req: String,
}

impl BookingRequest {
    /// The booking form's rules, applied before anything goes on the wire.
    pub fn validate(&self, unit: &Villa) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().len() < 2 {
            errors.push(FieldError::new(
                "name",
                "Name must be at least 2 characters",
            ));
        }

        if self.contact.trim().is_empty() {
            errors.push(FieldError::new("contact", "Contact number is required"));
        } else if !is_valid_contact(&self.contact) {
            errors.push(FieldError::new("contact", "Invalid contact number format"));
        }

        if self.check_out <= self.check_in {
            errors.push(FieldError::new(
                "check_out",
                "Check-out must be after check-in",
            ));
        }

        if self.pax < 1 {
            errors.push(FieldError::new("pax", "At least 1 guest is required"));
        } else if !AvailabilityService::is_guest_count_valid(self.pax, unit) {
            errors.push(FieldError::new(
                "pax",
                format!("Maximum {} guests allowed", unit.max_guests),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_valid_contact(contact: &str) -> bool {
    let re = Regex::new(r"^[0-9+\-\s()]+$");
    re.unwrap().is_match(contact)
}

/// A reschedule request row from
/// `GET /api/reschedule-requests/booking/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RescheduleRequest {
    #[serde(
        default,
        deserialize_with = "crate::models::response::deserialize_optional_id"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "crate::models::response::deserialize_id")]
    pub booking_id: String,
    #[serde(default, with = "crate::models::dates::lenient_calendar_date")]
    pub new_check_in: Option<NaiveDate>,
    #[serde(default, with = "crate::models::dates::lenient_calendar_date")]
    pub new_check_out: Option<NaiveDate>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RescheduleRequest {
    pub fn status(&self) -> BookingStatus {
        BookingStatus::parse(self.status.as_deref())
    }
}

/// House check-in/check-out times appended to reschedule dates on the wire.
const CHECK_IN_TIME: &str = "14:00:00";
const CHECK_OUT_TIME: &str = "11:00:00";

/// Input for `POST /api/reschedule-requests`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescheduleInput {
    pub booking_id: String,
    pub new_check_in: NaiveDate,
    pub new_check_out: NaiveDate,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReschedulePayload {
    booking_id: String,
    new_check_in: String,
    new_check_out: String,
    reason: Option<String>,
}

impl RescheduleInput {
    pub fn validate(&self, today: NaiveDate) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.new_check_in < today {
            errors.push(FieldError::new(
                "new_check_in",
                "New check-in date must be in the future",
            ));
        }
        if self.new_check_out <= self.new_check_in {
            errors.push(FieldError::new(
                "new_check_out",
                "Check-out date must be after check-in date",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_payload(&self) -> ReschedulePayload {
        ReschedulePayload {
            booking_id: self.booking_id.clone(),
            new_check_in: format!(
                "{} {}",
                dates::format_calendar_date(self.new_check_in),
                CHECK_IN_TIME
            ),
            new_check_out: format!(
                "{} {}",
                dates::format_calendar_date(self.new_check_out),
                CHECK_OUT_TIME
            ),
            reason: self.reason.clone(),
        }
    }
}

/// Input for `POST /api/feedback`, offered once a booking completed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeedbackInput {
    pub booking_id: String,
    pub rating: u8,
    pub comment: Option<String>,
}

impl FeedbackInput {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        if self.rating < 1 || self.rating > 5 {
            return Err(vec![FieldError::new(
                "rating",
                "Please select a rating between 1 and 5",
            )]);
        }
        Ok(())
    }
}
