//! Reader Panel Component
//!
//! Side panel with the extracted text of one article.

use leptos::prelude::*;

use crate::components::LoadingSpinner;
use crate::context::AppContext;
use crate::reader::ReaderState;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ReaderPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <Show when=move || store.reader().with(|r| r.is_open())>
            <aside class="reader-panel">
                <div class="reader-header">
                    <button class="close-btn" title="Close" on:click=move |_| ctx.close_reader()>
                        "✕"
                    </button>
                </div>
                {move || match store.reader().get() {
                    ReaderState::Closed => ().into_any(),
                    ReaderState::Loading { title, .. } => {
                        view! {
                            <h2 class="reader-title">{title}</h2>
                            <LoadingSpinner />
                        }
                            .into_any()
                    }
                    ReaderState::Open { link, article } => {
                        let paragraphs = article
                            .content
                            .lines()
                            .map(str::trim)
                            .filter(|l| !l.is_empty())
                            .map(|l| view! { <p>{l.to_string()}</p> })
                            .collect_view();
                        view! {
                            <h2 class="reader-title">{article.title}</h2>
                            <a href=link target="_blank" rel="noopener noreferrer" class="read-link">
                                "Open original →"
                            </a>
                            <div class="reader-content">{paragraphs}</div>
                        }
                            .into_any()
                    }
                    ReaderState::Failed { message, .. } => {
                        view! { <p class="reader-error">"Could not load article: " {message}</p> }.into_any()
                    }
                }}
            </aside>
        </Show>
    }
}
