mod booking_list;
mod carousel;
mod header;
mod room_list;

pub use booking_list::BookingList;
pub use carousel::Carousel;
pub use header::Header;
pub use room_list::RoomList;
