/// Backend origin. Overridable at compile time through `.env` (see build.rs).
pub const API_BASE_URL: &str = match option_env!("BOOKSTAY_API_URL") {
    Some(url) => url,
    None => "https://bookings-backend-g8dm.onrender.com",
};

/// localStorage key holding the serialized identity+token bundle.
pub const STORAGE_KEY_USER: &str = "user";
/// localStorage key holding the raw bearer token.
pub const STORAGE_KEY_TOKEN: &str = "token";

pub const REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const CAROUSEL_INTERVAL_MS: u32 = 3_000;
