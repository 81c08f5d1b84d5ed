//! Per-resource state containers. Each container only changes through its
//! lifecycle actions; pages receive the containers via context instead of
//! reaching for globals.

pub mod auth_state;
pub mod booking_state;
pub mod room_state;

pub use auth_state::{AuthAction, AuthState};
pub use booking_state::{BookingAction, BookingState};
pub use room_state::{RoomAction, RoomState};

use yew::UseReducerHandle;

/// One request lifecycle per resource. `Reset` returns a terminal status to
/// `Idle` without touching the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    pub fn is_succeeded(self) -> bool {
        self == Self::Succeeded
    }

    pub fn is_failed(self) -> bool {
        self == Self::Failed
    }
}

pub type AuthContext = UseReducerHandle<AuthState>;
pub type RoomContext = UseReducerHandle<RoomState>;
pub type BookingContext = UseReducerHandle<BookingState>;
