//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::reader::ReaderState;
use crate::settings::{BrowserStorage, Settings};
use crate::sync::Synchronizer;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Query parameters and the current page of results
    pub sync: Synchronizer,
    /// Dark mode and favorites, persisted to localStorage
    pub settings: Settings<BrowserStorage>,
    /// Full-article side panel
    pub reader: ReaderState,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            sync: Synchronizer::new(config.page_size),
            settings: Settings::load(BrowserStorage, config.identity_policy),
            reader: ReaderState::default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
