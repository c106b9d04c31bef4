//! Pagination Bar Component
//!
//! First/prev/next/last controls. Hidden in favorites view, which only
//! filters the page already loaded.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::pagination::PageMove;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn PageButton(mv: PageMove, label: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <button
            class="page-btn"
            disabled=move || store.sync().with(|s| s.pagination().target(mv).is_none())
            on:click=move |_| ctx.go_to(mv)
        >
            {label}
        </button>
    }
}

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_app_store();
    let label = move || store.sync().with(|s| s.pagination().label());

    view! {
        <Show when=move || !store.sync().with(|s| s.favorites_view())>
            <nav class="pagination">
                <PageButton mv=PageMove::First label="«" />
                <PageButton mv=PageMove::Prev label="Previous" />
                <span class="page-label">{label}</span>
                <PageButton mv=PageMove::Next label="Next" />
                <PageButton mv=PageMove::Last label="»" />
            </nav>
        </Show>
    }
}
