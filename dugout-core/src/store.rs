//! Persistence seam. The core never touches a browser API; platforms
//! implement [`StateStore`] and the app loads through the helpers here.

use anyhow::Result;

use crate::state::TrackerState;

/// Where tracker state lives between sessions. The web crate persists to
/// `localStorage`; tests use an in-memory slot.
pub trait StateStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    /// Implementation-defined; a full or unavailable backing store.
    fn save_state(&self, state: &TrackerState) -> Result<(), Self::Error>;

    /// `Ok(None)` means nothing usable is saved, whether absent or
    /// unreadable. Callers fall back to defaults.
    ///
    /// # Errors
    /// Implementation-defined; an unavailable backing store.
    fn load_state(&self) -> Result<Option<TrackerState>, Self::Error>;

    /// # Errors
    /// Implementation-defined; an unavailable backing store.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// Load saved state, erasing the store's concrete error type.
///
/// # Errors
/// Whatever the store reports, wrapped as [`anyhow::Error`].
pub fn load_saved<S: StateStore>(store: &S) -> Result<Option<TrackerState>> {
    store.load_state().map_err(anyhow::Error::new)
}

/// Load saved state, treating "nothing saved" and store failures alike
/// as a first launch.
#[must_use]
pub fn load_or_default<S: StateStore>(store: &S) -> TrackerState {
    load_saved(store).ok().flatten().unwrap_or_default()
}
