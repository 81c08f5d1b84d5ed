use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomNumber {
    pub number: u32,
    #[serde(rename = "unavailableDates", default)]
    pub unavailable_dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(rename = "roomNumbers", default)]
    pub room_numbers: Vec<RoomNumber>,
    #[serde(rename = "img", default)]
    pub images: Vec<String>,
}

/// Create/update payload; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomInput {
    pub name: String,
    pub price: f64,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "roomNumbers")]
    pub room_numbers: Vec<RoomNumber>,
    #[serde(rename = "img")]
    pub images: Vec<String>,
}
