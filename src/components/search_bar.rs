//! Search Bar Component
//!
//! Free-text search. Every keystroke is recorded immediately; the request
//! only goes out once typing pauses.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <input
            type="text"
            class=move || {
                if store.sync().with(|s| s.search_pending()) { "search-input pending" } else { "search-input" }
            }
            placeholder="Search articles..."
            prop:value=move || store.sync().with(|s| s.query().search_term.clone())
            on:input=move |ev| ctx.search_input(event_target_value(&ev))
        />
    }
}
