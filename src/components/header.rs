//! Header Component
//!
//! Page title plus the favorites-view and dark-mode toggles.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let dark = move || store.settings().with(|s| s.dark_mode());
    let favorites_view = move || store.sync().with(|s| s.favorites_view());
    let favorite_count = move || store.settings().with(|s| s.favorites().len());

    view! {
        <header class="app-header">
            <h1>"🧠 AI & Data Science News Hub"</h1>
            <div class="header-actions">
                <button
                    class=move || if favorites_view() { "favorites-toggle active" } else { "favorites-toggle" }
                    title=move || if favorites_view() { "Show all articles" } else { "Show favorites" }
                    on:click=move |_| ctx.set_favorites_view(!store.sync().with_untracked(|s| s.favorites_view()))
                >
                    {move || format!("★ {}", favorite_count())}
                </button>
                <button class="dark-mode-toggle" on:click=move |_| ctx.toggle_dark_mode()>
                    {move || if dark() { "🌞" } else { "🌙" }}
                </button>
            </div>
        </header>
    }
}
