//! Sort Select Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::query::SortKey;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SortSelect() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let selected = move || store.sync().with(|s| s.query().sort.map(SortKey::as_str).unwrap_or(""));

    view! {
        <select
            class="sort-select"
            prop:value=selected
            on:change=move |ev| ctx.set_sort(SortKey::parse(&event_target_value(&ev)))
        >
            <option value="">"Sort by..."</option>
            {SortKey::ALL
                .into_iter()
                .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                .collect_view()}
        </select>
    }
}
