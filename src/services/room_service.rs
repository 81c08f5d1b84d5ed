use web_sys::AbortSignal;

use crate::models::{Room, RoomInput};
use crate::services::api::{self, Credentials};
use crate::services::error::ApiError;

// Room reads attach the token whenever the visitor has one; mutations
// require it.

pub async fn get_rooms(
    token: Option<&str>,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Room>, ApiError> {
    api::get_json("/rooms", Credentials::MaybeBearer(token), signal).await
}

pub async fn get_room(
    id: &str,
    token: Option<&str>,
    signal: Option<&AbortSignal>,
) -> Result<Room, ApiError> {
    api::get_json(&format!("/rooms/{id}"), Credentials::MaybeBearer(token), signal).await
}

pub async fn create_room(room: &RoomInput, token: Option<&str>) -> Result<Room, ApiError> {
    api::post_json("/rooms", room, Credentials::Bearer(token)).await
}

pub async fn update_room(id: &str, room: &RoomInput, token: Option<&str>) -> Result<Room, ApiError> {
    api::put_json(&format!("/rooms/{id}"), room, Credentials::Bearer(token)).await
}

pub async fn delete_room(id: &str, token: Option<&str>) -> Result<(), ApiError> {
    api::delete(&format!("/rooms/{id}"), Credentials::Bearer(token)).await
}
