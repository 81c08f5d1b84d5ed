use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Populated room reference on a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "roomId", default)]
    pub room: Option<RoomRef>,
    #[serde(rename = "checkInDate")]
    pub check_in_date: NaiveDate,
    #[serde(rename = "checkOutDate")]
    pub check_out_date: NaiveDate,
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingInput {
    pub name: String,
    pub email: String,
    #[serde(rename = "roomId")]
    pub room_id: String,
    #[serde(rename = "checkInDate")]
    pub check_in_date: NaiveDate,
    #[serde(rename = "checkOutDate")]
    pub check_out_date: NaiveDate,
}
