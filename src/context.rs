//! Application Context
//!
//! Actions shared with every component via the Leptos Context API. Each
//! action mutates the store and, when the synchronizer asks for it, performs
//! the fetch and feeds the result back.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::models::Article;
use crate::pagination::PageMove;
use crate::query::SortKey;
use crate::share;
use crate::store::{AppStateStoreFields, AppStore};
use crate::sync::FetchTicket;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: AppConfig,
    api: ApiClient,
    store: AppStore,
}

impl AppContext {
    pub fn new(config: AppConfig, store: AppStore) -> Self {
        Self {
            config,
            api: ApiClient::new(config.api_base),
            store,
        }
    }

    fn dispatch(&self, ticket: Option<FetchTicket>) {
        let Some(FetchTicket { seq, query }) = ticket else {
            return;
        };
        let store = self.store;
        let api = self.api;
        log::info!("[Sync] Request #{}: {}", seq, api.articles_url(&query));

        spawn_local(async move {
            let result = api.fetch_articles(&query).await;
            match &result {
                Ok(page) => log::debug!(
                    "[Sync] Request #{} returned {} articles, {} pages",
                    seq,
                    page.articles.len(),
                    page.total_pages
                ),
                Err(e) => log::error!("[Sync] Request #{} failed: {}", seq, e),
            }
            if !store.sync().write().complete(seq, result) {
                log::debug!("[Sync] Discarded stale response #{}", seq);
            }
        });
    }

    /// Initial load
    pub fn start(&self) {
        let ticket = self.store.sync().write().start();
        self.dispatch(ticket);
    }

    /// Record a keystroke and arm its debounce timer
    pub fn search_input(&self, raw: String) {
        let ticket = self.store.sync().write().search_input(raw);
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ctx.config.debounce_ms).await;
            let fetch = ctx.store.sync().write().search_settled(ticket);
            ctx.dispatch(fetch);
        });
    }

    pub fn set_sort(&self, sort: Option<SortKey>) {
        let ticket = self.store.sync().write().set_sort(sort);
        self.dispatch(ticket);
    }

    pub fn go_to(&self, mv: PageMove) {
        let ticket = self.store.sync().write().go_to(mv);
        self.dispatch(ticket);
    }

    pub fn set_favorites_view(&self, on: bool) {
        let ticket = self.store.sync().write().set_favorites_view(on);
        self.dispatch(ticket);
    }

    /// Replay the last request
    pub fn retry(&self) {
        let ticket = self.store.sync().write().retry();
        self.dispatch(ticket);
    }

    pub fn toggle_favorite(&self, article: &Article, index: usize) {
        match self.store.settings().write().toggle_favorite(article, index) {
            Some(now_favorite) => log::debug!(
                "[Favorites] {} -> {}",
                article.title,
                if now_favorite { "added" } else { "removed" }
            ),
            None => log::warn!("[Favorites] Article at position {} has no link or title", index),
        }
    }

    pub fn toggle_dark_mode(&self) {
        let dark = self.store.settings().write().toggle_dark_mode();
        log::debug!("[Settings] Dark mode {}", dark);
    }

    pub fn share(&self, article: Article) {
        spawn_local(async move {
            match share::share_article(&article).await {
                Ok(outcome) => log::debug!("[Share] {:?}: {}", outcome, article.link),
                Err(e) => log::error!("[Share] Error sharing {}: {}", article.link, e),
            }
        });
    }

    /// Load the extracted text of `article` into the reader panel
    pub fn open_reader(&self, article: &Article) {
        if !article.has_link() {
            return;
        }
        let link = article.link.clone();
        if !self.store.reader().write().open(&link, &article.title) {
            return;
        }
        let store = self.store;
        let api = self.api;
        spawn_local(async move {
            let result = api.fetch_full_article(&link).await;
            if let Err(e) = &result {
                log::warn!("[Reader] Failed to load {}: {}", link, e);
            }
            store.reader().write().resolve(&link, result);
        });
    }

    pub fn close_reader(&self) {
        self.store.reader().write().close();
    }
}
