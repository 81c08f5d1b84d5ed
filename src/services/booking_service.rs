use web_sys::AbortSignal;

use crate::models::{Booking, BookingInput};
use crate::services::api::{self, Credentials};
use crate::services::error::ApiError;

// Every booking endpoint requires the bearer token; a missing token resolves
// to `Unauthenticated` without touching the network.

pub async fn get_bookings(
    token: Option<&str>,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Booking>, ApiError> {
    api::get_json("/bookings", Credentials::Bearer(token), signal).await
}

pub async fn get_booking(
    id: &str,
    token: Option<&str>,
    signal: Option<&AbortSignal>,
) -> Result<Booking, ApiError> {
    api::get_json(&format!("/bookings/{id}"), Credentials::Bearer(token), signal).await
}

pub async fn create_booking(
    booking: &BookingInput,
    token: Option<&str>,
) -> Result<Booking, ApiError> {
    api::post_json("/bookings", booking, Credentials::Bearer(token)).await
}

pub async fn confirm_booking(id: &str, token: Option<&str>) -> Result<(), ApiError> {
    api::put_ok(
        &format!("/bookings/{id}"),
        &serde_json::json!({ "confirmed": true }),
        Credentials::Bearer(token),
    )
    .await
}

pub async fn delete_booking(id: &str, token: Option<&str>) -> Result<(), ApiError> {
    api::delete(&format!("/bookings/{id}"), Credentials::Bearer(token)).await
}
