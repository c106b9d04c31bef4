//! News Hub App
//!
//! Root component: header, search/sort toolbar, results and the reader panel.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ArticleGrid, ErrorPanel, Header, LoadingSpinner, PaginationBar, ReaderPanel, SearchBar, SortSelect,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

/// Toggle the `dark` class on `<html>`
fn apply_dark_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        log::warn!("[APP] Could not set dark class: {:?}", e);
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(&config));
    provide_context(store);

    let ctx = AppContext::new(config, store);
    provide_context(ctx);

    log::info!("[APP] Starting, API at {}", config.api_base);
    ctx.start();

    Effect::new(move |_| {
        apply_dark_class(store.settings().with(|s| s.dark_mode()));
    });

    // Keystrokes also touch `sync`; only re-render the results when these change
    let fetch_state = Memo::new(move |_| {
        store
            .sync()
            .with(|s| (s.is_loading(), s.error().map(str::to_string)))
    });

    let main_class = move || {
        if store.settings().with(|s| s.dark_mode()) {
            "app-layout dark"
        } else {
            "app-layout"
        }
    };

    view! {
        <main class=main_class>
            <div class="app-container">
                <Header />

                <div class="toolbar">
                    <SearchBar />
                    <SortSelect />
                </div>

                {move || {
                    let (loading, error) = fetch_state.get();
                    if loading {
                        view! { <LoadingSpinner /> }.into_any()
                    } else if let Some(message) = error {
                        view! { <ErrorPanel message=message /> }.into_any()
                    } else {
                        view! {
                            <ArticleGrid />
                            <PaginationBar />
                        }
                            .into_any()
                    }
                }}
            </div>

            // Right: reader panel, shown when an article is opened
            <ReaderPanel />
        </main>
    }
}
