//! Article Grid Component
//!
//! Cards for the current page, or only the favorited ones in favorites view.

use leptos::prelude::*;

use crate::components::ArticleCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ArticleGrid() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let favorites = store.settings().with(|s| s.favorites().clone());
        store.sync().with(|s| s.visible_articles(&favorites))
    });
    let empty_message = Memo::new(move |_| {
        store.sync().with(|s| {
            if !s.favorites_view() {
                "No articles found."
            } else if s.articles().is_empty() {
                "Nothing loaded to filter."
            } else {
                "No favorites on this page yet."
            }
        })
    });

    move || {
        let articles = visible.get();
        if articles.is_empty() {
            view! { <p class="empty-state">{empty_message.get()}</p> }.into_any()
        } else {
            view! {
                <div class="article-grid">
                    {articles
                        .into_iter()
                        .map(|(index, article)| view! { <ArticleCard index=index article=article /> })
                        .collect_view()}
                </div>
            }
                .into_any()
        }
    }
}
