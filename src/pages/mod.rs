mod booking;
mod create_room;
mod dashboard;
mod edit_room;
mod home;
mod login;
mod not_found;
mod register;
mod room;
mod rooms;

pub use booking::Booking;
pub use create_room::CreateRoom;
pub use dashboard::Dashboard;
pub use edit_room::EditRoom;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
pub use room::Room;
pub use rooms::Rooms;
