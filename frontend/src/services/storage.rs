//! `localStorage`-backed persistence for the campaign draft.

use common::ports::PersistencePort;
use log::warn;
use web_sys::Storage;

/// Stateless handle on `window.localStorage`.
///
/// Every call looks the storage up again, so a browser that disables it
/// (private mode, blocked cookies) degrades to "nothing saved" instead of
/// failing the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePort;

impl LocalStoragePort {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PersistencePort for LocalStoragePort {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    warn!("localStorage write of {} failed: {:?}", key, e);
                }
            }
            None => warn!("localStorage unavailable, {} not saved", key),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                warn!("localStorage remove of {} failed: {:?}", key, e);
            }
        }
    }
}
