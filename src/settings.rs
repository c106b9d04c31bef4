//! Settings Store
//!
//! Dark mode and favorites, loaded once at startup and written back on every
//! change. The backing key/value store is injected so the browser's
//! `localStorage` can be swapped for an in-memory map.

use crate::error::StorageError;
use crate::favorites::{Favorites, IdentityPolicy};
use crate::models::Article;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const FAVORITES_KEY: &str = "favorites";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on each access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct Settings<S> {
    backend: S,
    dark_mode: bool,
    favorites: Favorites,
}

impl<S: KeyValueStore> Settings<S> {
    /// Missing or unreadable keys fall back to light mode and no favorites
    pub fn load(backend: S, policy: IdentityPolicy) -> Self {
        let dark_mode = match backend.get(DARK_MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                log::warn!("[Settings] Could not read {}: {}", DARK_MODE_KEY, e);
                false
            }
        };

        let ids = match backend.get(FAVORITES_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                log::warn!("[Settings] Ignoring malformed {}: {}", FAVORITES_KEY, e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("[Settings] Could not read {}: {}", FAVORITES_KEY, e);
                Vec::new()
            }
        };
        let favorites = Favorites::from_ids(ids, policy);

        log::debug!(
            "[Settings] Loaded dark_mode={}, {} favorites",
            dark_mode,
            favorites.len()
        );
        Self {
            backend,
            dark_mode,
            favorites,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        let value = if self.dark_mode { "true" } else { "false" };
        if let Err(e) = self.backend.set(DARK_MODE_KEY, value) {
            log::warn!("[Settings] Failed to save {}: {}", DARK_MODE_KEY, e);
        }
        self.dark_mode
    }

    /// See [`Favorites::toggle`]. The full set is saved after every change.
    pub fn toggle_favorite(&mut self, article: &Article, index: usize) -> Option<bool> {
        let now_favorite = self.favorites.toggle(article, index)?;
        self.save_favorites();
        Some(now_favorite)
    }

    fn save_favorites(&self) {
        let result = serde_json::to_string(self.favorites.ids())
            .map_err(StorageError::from)
            .and_then(|json| self.backend.set(FAVORITES_KEY, &json));
        if let Err(e) = result {
            log::warn!("[Settings] Failed to save {}: {}", FAVORITES_KEY, e);
        }
    }
}
