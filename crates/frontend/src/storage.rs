//! `localStorage`-backed session storage

use gloo::storage::{LocalStorage, Storage};
use tracing::warn;
use wee_core::error::{CoreError, CoreResult};
use wee_core::session::SessionStorage;

/// Session storage over the browser's `localStorage`
///
/// Values are stored raw; the session store does its own JSON encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("localStorage write failed: {e:?}")))
    }

    fn remove(&self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            warn!("localStorage remove of {key} failed: {e:?}");
        }
    }
}
