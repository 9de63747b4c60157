//! Tracker persistence backed by browser `localStorage`.

use dugout_core::{StateStore, TrackerState};
use thiserror::Error;

use crate::dom;

/// Single storage slot for the whole tracker. Bump the suffix when the
/// persisted shape changes incompatibly.
pub const STORAGE_KEY: &str = "dugout.tracker.v1";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persists the tracker state as one JSON value under [`STORAGE_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        dom::local_storage().map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))
    }
}

impl StateStore for LocalStorageStore {
    type Error = StorageError;

    fn save_state(&self, state: &TrackerState) -> Result<(), Self::Error> {
        let json = serde_json::to_string(state)?;
        self.storage()?
            .set_item(STORAGE_KEY, &json)
            .map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))
    }

    fn load_state(&self) -> Result<Option<TrackerState>, Self::Error> {
        let raw = self
            .storage()?
            .get_item(STORAGE_KEY)
            .map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                // Unreadable saves degrade to a first launch.
                log::warn!("discarding unreadable saved state: {err}");
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<(), Self::Error> {
        self.storage()?
            .remove_item(STORAGE_KEY)
            .map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))
    }
}
