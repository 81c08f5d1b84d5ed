//! Locally persisted proof of authentication. The `user` key holds the whole
//! identity+token bundle, the `token` key the raw bearer token; both are kept
//! consistent or not present at all.

use crate::models::AuthUser;
use crate::utils::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};
use crate::utils::storage;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub user: Option<AuthUser>,
}

impl Session {
    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.token.as_str())
    }
}

/// Read the persisted session. Absent or malformed entries yield the empty
/// session; a stored user without a token is a half-written session and is
/// discarded rather than reported as logged in.
pub fn load() -> Session {
    match storage::load_from_storage::<AuthUser>(STORAGE_KEY_USER) {
        Some(user) if !user.token.is_empty() => Session { user: Some(user) },
        Some(_) => {
            log::warn!("⚠️ Discarding stored session without a token");
            clear();
            Session::default()
        }
        None => Session::default(),
    }
}

/// Persist identity and token together. If the token write fails, the user
/// entry is rolled back so `load()` never sees a partial session.
pub fn save(user: &AuthUser) -> Result<(), String> {
    storage::save_to_storage(STORAGE_KEY_USER, user)?;
    if let Err(err) = storage::save_raw(STORAGE_KEY_TOKEN, &user.token) {
        storage::remove_from_storage(STORAGE_KEY_USER);
        return Err(err);
    }
    Ok(())
}

pub fn clear() {
    storage::remove_from_storage(STORAGE_KEY_USER);
    storage::remove_from_storage(STORAGE_KEY_TOKEN);
}
