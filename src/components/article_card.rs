//! Article Card Component
//!
//! One article summary with favorite, share and read-here actions.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Article;
use crate::store::{use_app_store, AppStateStoreFields};

/// Card for the article at `index` in the fetched page
#[component]
pub fn ArticleCard(index: usize, article: Article) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let can_favorite = store
        .settings()
        .with_untracked(|s| s.favorites().can_favorite(&article, index));
    let is_favorite = {
        let article = article.clone();
        Memo::new(move |_| store.settings().with(|s| s.favorites().is_favorite(&article, index)))
    };

    let favorite_title = if can_favorite {
        "Favorite"
    } else {
        "Cannot favorite an article without link or title"
    };

    let toggle_article = article.clone();
    let share_article = article.clone();
    let reader_article = article.clone();
    let has_link = article.has_link();
    let Article {
        title,
        link,
        date,
        authors,
        summary,
        categories,
    } = article;

    view! {
        <article class="article-card">
            <div class="article-body">
                <h2 class="article-title">{title}</h2>
                {date.map(|d| view! { <p class="article-date">"📅 " {d}</p> })}
                {(!authors.is_empty())
                    .then(|| view! { <p class="article-authors">"✍️ " {authors.display()}</p> })}
                <p class="article-summary">{summary}</p>
                {(!categories.is_empty())
                    .then(|| {
                        view! {
                            <div class="article-categories">
                                {categories
                                    .into_iter()
                                    .map(|c| view! { <span class="category-chip">{c}</span> })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>

            <div class="article-footer">
                {has_link
                    .then(|| {
                        view! {
                            <a href=link target="_blank" rel="noopener noreferrer" class="read-link">
                                "Read Paper →"
                            </a>
                        }
                    })}
                <div class="article-actions">
                    {has_link
                        .then(|| {
                            view! {
                                <button
                                    class="reader-btn"
                                    title="Read here"
                                    on:click=move |_| ctx.open_reader(&reader_article)
                                >
                                    "📖"
                                </button>
                            }
                        })}
                    <button
                        class=move || if is_favorite.get() { "favorite-btn active" } else { "favorite-btn" }
                        title=favorite_title
                        disabled=!can_favorite
                        on:click=move |_| ctx.toggle_favorite(&toggle_article, index)
                    >
                        {move || if is_favorite.get() { "★" } else { "☆" }}
                    </button>
                    <button class="share-btn" title="Share" on:click=move |_| ctx.share(share_article.clone())>
                        "📤"
                    </button>
                </div>
            </div>
        </article>
    }
}
