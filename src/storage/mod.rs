use crate::models::Entry;
use leptos::logging::{error, warn};
use serde::Serialize;

pub(crate) const USER_ENTRIES_KEY: &str = "thirty_doors_user_entries";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum StoreErrorKind {
    Unavailable,
    Serialize,
    Write,
}

#[derive(Clone, Debug)]
pub(crate) struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StoreError {
    fn unavailable() -> Self {
        Self {
            kind: StoreErrorKind::Unavailable,
            message: "Local storage is not available".to_string(),
        }
    }

    fn serialize(e: serde_json::Error) -> Self {
        Self {
            kind: StoreErrorKind::Serialize,
            message: e.to_string(),
        }
    }

    fn write(key: &str, e: wasm_bindgen::JsValue) -> Self {
        // Quota errors arrive as DOMException objects; keep whatever text we can get.
        let detail = e
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&e, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| "unknown error".to_string());
        Self {
            kind: StoreErrorKind::Write,
            message: format!("Could not save to \"{key}\": {detail}"),
        }
    }
}

pub(crate) type StoreResult<T> = Result<T, StoreError>;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) -> StoreResult<()> {
    let json = serde_json::to_string(value).map_err(StoreError::serialize)?;
    let storage = local_storage().ok_or_else(StoreError::unavailable)?;
    storage
        .set_item(key, &json)
        .map_err(|e| StoreError::write(key, e))
}

/// Decode a persisted entry list. Absent or malformed payloads read as empty.
pub(crate) fn decode_entries(json: Option<&str>) -> Vec<Entry> {
    let Some(json) = json else {
        return Vec::new();
    };

    serde_json::from_str(json).unwrap_or_else(|e| {
        warn!("ignoring malformed user entries: {e}");
        Vec::new()
    })
}

pub(crate) fn load_user_entries(key: &str) -> Vec<Entry> {
    let raw = local_storage().and_then(|s| s.get_item(key).ok().flatten());
    decode_entries(raw.as_deref())
}

/// Overwrite the full persisted list.
pub(crate) fn save_user_entries(key: &str, entries: &[Entry]) -> StoreResult<()> {
    save_json_to_storage(key, &entries).inspect_err(|e| {
        error!("failed to persist {} user entries: {e}", entries.len());
    })
}
