pub mod api;
pub mod auth_service;
pub mod booking_service;
pub mod error;
pub mod room_service;

pub use error::ApiError;
