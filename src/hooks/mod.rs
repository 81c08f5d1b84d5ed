mod use_auth_guard;

pub use use_auth_guard::{use_require_session, use_session_expiry};
