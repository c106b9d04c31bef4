//! Error Panel Component
//!
//! Shown in place of the grid when the last request failed.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div class="error-panel">
            <p>"Error loading articles: " {message}</p>
            // Favorites view never fetches, so there is nothing to retry there
            <Show when=move || !store.sync().with(|s| s.favorites_view())>
                <button class="retry-btn" on:click=move |_| ctx.retry()>
                    "Retry"
                </button>
            </Show>
        </div>
    }
}
