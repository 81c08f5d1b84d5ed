mod auth;
mod booking;
mod room;

pub use auth::{AuthUser, LoginRequest, RegisterRequest};
pub use booking::{Booking, BookingInput, RoomRef};
pub use room::{Room, RoomInput, RoomNumber};
