use serde::Deserialize;
use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::models::booking::{
    Booking, BookingRequest, FeedbackInput, RescheduleInput, RescheduleRequest,
};
use crate::models::response::ListPayload;

#[derive(Debug, Deserialize)]
pub struct CreateBookingResponse {
    #[serde(
        default,
        deserialize_with = "crate::models::response::deserialize_optional_id"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The signed-in customer's bookings.
pub async fn list_bookings(client: &ApiClient) -> Result<Vec<Booking>, ApiError> {
    let payload: ListPayload<Booking> = client.get("/api/bookings").await?;
    Ok(payload.into_items())
}

/// Submits a booking request. The backend re-checks availability here, so
/// a date conflict that slipped past the client-side snapshot comes back
/// as a rejection, not a silent double booking.
pub async fn create_booking(
    client: &ApiClient,
    request: &BookingRequest,
) -> Result<CreateBookingResponse, ApiError> {
    client.post("/api/bookings", request).await
}

pub async fn cancel_booking(client: &ApiClient, booking_id: &str) -> Result<(), ApiError> {
    let path = format!("/api/bookings/{}", booking_id);
    let _: Value = client.delete(&path).await?;
    Ok(())
}

/// Reschedule requests already filed against one booking.
pub async fn reschedule_requests(
    client: &ApiClient,
    booking_id: &str,
) -> Result<Vec<RescheduleRequest>, ApiError> {
    let path = format!("/api/reschedule-requests/booking/{}", booking_id);
    let payload: ListPayload<RescheduleRequest> = client.get(&path).await?;
    Ok(payload.into_items())
}

pub async fn submit_reschedule(
    client: &ApiClient,
    input: &RescheduleInput,
) -> Result<(), ApiError> {
    let payload = input.to_payload();
    let _: Value = client.post("/api/reschedule-requests", &payload).await?;
    Ok(())
}

pub async fn submit_feedback(client: &ApiClient, input: &FeedbackInput) -> Result<(), ApiError> {
    let _: Value = client.post("/api/feedback", input).await?;
    Ok(())
}
