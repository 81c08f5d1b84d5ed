use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage is not available")?;
    let json = serde_json::to_string(value).map_err(|e| format!("failed to serialize {key}: {e}"))?;
    storage
        .set_item(key, &json)
        .map_err(|_| format!("failed to write {key} to localStorage"))?;
    Ok(())
}

/// Missing, inaccessible, or malformed entries all read as `None`.
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("failed to write {key} to localStorage"))
}

pub fn remove_from_storage(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
