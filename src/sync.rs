//! Query Synchronizer
//!
//! Owns the query parameters and the last fetched page, and decides when a
//! request has to go out. Every operation that can trigger a fetch returns an
//! `Option<FetchTicket>`; the caller performs the request and reports back via
//! [`Synchronizer::complete`].
//!
//! Requests carry a sequence number. Only the completion for the most recently
//! issued sequence is applied, so a slow response to an old page or search
//! can never overwrite a newer one.

use crate::debounce::Debouncer;
use crate::error::FetchError;
use crate::favorites::Favorites;
use crate::models::{Article, ArticlePage};
use crate::pagination::{PageMove, Pagination};
use crate::query::{ArticleQuery, QueryState, SortKey};

/// A request the caller must perform
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ArticleQuery,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Synchronizer {
    query: QueryState,
    page_size: u32,
    total_pages: u32,
    search: Debouncer<String>,
    favorites_view: bool,
    articles: Vec<Article>,
    status: FetchStatus,
    /// Sequence number of the most recently issued request (0 = none yet)
    latest_seq: u64,
    last_request: Option<ArticleQuery>,
}

impl Synchronizer {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: QueryState::default(),
            page_size,
            total_pages: 1,
            search: Debouncer::default(),
            favorites_view: false,
            articles: Vec::new(),
            status: FetchStatus::Idle,
            latest_seq: 0,
            last_request: None,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.query.page, self.total_pages)
    }

    pub fn favorites_view(&self) -> bool {
        self.favorites_view
    }

    /// Typed input still waiting out the debounce period
    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Articles to render, paired with their position in the fetched page.
    /// In favorites view only favorited ones are kept.
    pub fn visible_articles(&self, favorites: &Favorites) -> Vec<(usize, Article)> {
        self.articles
            .iter()
            .enumerate()
            .filter(|(idx, article)| !self.favorites_view || favorites.is_favorite(article, *idx))
            .map(|(idx, article)| (idx, article.clone()))
            .collect()
    }

    // ========================
    // User actions
    // ========================

    /// Initial load
    pub fn start(&mut self) -> Option<FetchTicket> {
        self.query_changed()
    }

    /// Record a keystroke. Returns the debounce ticket to hand back to
    /// [`Self::search_settled`] once the quiet period has elapsed.
    pub fn search_input(&mut self, raw: String) -> u64 {
        self.query.search_term = raw.clone();
        self.search.push(raw)
    }

    /// Quiet period for `ticket` elapsed. Superseded tickets are ignored.
    pub fn search_settled(&mut self, ticket: u64) -> Option<FetchTicket> {
        let term = self.search.settle(ticket)?;
        if term == self.query.debounced_search {
            return None;
        }
        self.query.debounced_search = term;
        self.query_changed()
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) -> Option<FetchTicket> {
        if self.query.sort == sort {
            return None;
        }
        self.query.sort = sort;
        self.query_changed()
    }

    pub fn go_to(&mut self, mv: PageMove) -> Option<FetchTicket> {
        let page = self.pagination().target(mv)?;
        self.query.page = page;
        self.query_changed()
    }

    /// Entering favorites view never fetches. Leaving it fetches only if the
    /// query moved on while the view was active.
    pub fn set_favorites_view(&mut self, on: bool) -> Option<FetchTicket> {
        if self.favorites_view == on {
            return None;
        }
        self.favorites_view = on;
        if on {
            return None;
        }
        let wanted = self.query.request(self.page_size);
        if self.last_request.as_ref() == Some(&wanted) {
            return None;
        }
        Some(self.issue(wanted))
    }

    /// Replay the last request under a fresh sequence number
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if self.favorites_view {
            return None;
        }
        let query = self.last_request.clone()?;
        Some(self.issue(query))
    }

    // ========================
    // Completion
    // ========================

    /// Apply a finished request. Returns `false` if it was superseded and
    /// therefore discarded.
    pub fn complete(&mut self, seq: u64, result: Result<ArticlePage, FetchError>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        match result {
            Ok(page) => {
                self.articles = page.articles;
                self.total_pages = page.total_pages.max(1);
                self.status = FetchStatus::Loaded;
            }
            Err(e) => {
                self.articles.clear();
                self.status = FetchStatus::Failed(e.to_string());
            }
        }
        true
    }

    fn query_changed(&mut self) -> Option<FetchTicket> {
        if self.favorites_view {
            return None;
        }
        let query = self.query.request(self.page_size);
        Some(self.issue(query))
    }

    fn issue(&mut self, query: ArticleQuery) -> FetchTicket {
        self.latest_seq += 1;
        self.last_request = Some(query.clone());
        self.status = FetchStatus::Loading;
        FetchTicket {
            seq: self.latest_seq,
            query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::IdentityPolicy;

    fn make_article(title: &str, link: &str) -> Article {
        Article {
            title: title.to_string(),
            link: link.to_string(),
            ..Default::default()
        }
    }

    fn make_page(count: usize, total_pages: u32) -> ArticlePage {
        ArticlePage {
            articles: (0..count)
                .map(|i| make_article(&format!("Paper {}", i), &format!("https://arxiv.org/abs/{}", i)))
                .collect(),
            total_pages,
        }
    }

    /// Started synchronizer with its initial request completed
    fn loaded(total_pages: u32) -> Synchronizer {
        let mut sync = Synchronizer::new(9);
        let ticket = sync.start().unwrap();
        assert!(sync.complete(ticket.seq, Ok(make_page(9, total_pages))));
        sync
    }

    #[test]
    fn test_initial_fetch() {
        let mut sync = Synchronizer::new(9);
        assert_eq!(sync.status(), &FetchStatus::Idle);

        let ticket = sync.start().unwrap();
        assert_eq!(ticket.query.to_query_string(), "page=1&limit=9");
        assert!(sync.is_loading());
        assert_eq!(sync.pagination().label(), "Page 1 of 1");
    }

    #[test]
    fn test_search_sort_scenario() {
        let mut sync = loaded(1);

        assert!(sync.set_sort(Some(SortKey::Date)).is_some());
        let ticket = sync.search_input("transformer".to_string());
        let fetch = sync.search_settled(ticket).unwrap();
        assert_eq!(
            fetch.query.to_query_string(),
            "page=1&limit=9&search=transformer&sort=date"
        );

        assert!(sync.complete(fetch.seq, Ok(make_page(3, 2))));
        assert_eq!(sync.status(), &FetchStatus::Loaded);
        assert_eq!(sync.articles().len(), 3);
        assert_eq!(sync.pagination().label(), "Page 1 of 2");
    }

    #[test]
    fn test_keystrokes_within_window_fetch_once_with_final_value() {
        let mut sync = loaded(1);

        let tickets: Vec<u64> = ["t", "tr", "tran", "transformer"]
            .into_iter()
            .map(|s| sync.search_input(s.to_string()))
            .collect();
        assert_eq!(sync.query().search_term, "transformer");
        assert_eq!(sync.query().debounced_search, "");
        assert!(sync.search_pending());

        let fetches: Vec<FetchTicket> = tickets.into_iter().filter_map(|t| sync.search_settled(t)).collect();
        assert_eq!(fetches.len(), 1);
        assert_eq!(fetches[0].query.search.as_deref(), Some("transformer"));
        assert_eq!(sync.query().debounced_search, "transformer");
        assert!(!sync.search_pending());
    }

    #[test]
    fn test_settling_to_same_term_does_not_fetch() {
        let mut sync = loaded(1);
        let t = sync.search_input("gan".to_string());
        assert!(sync.search_settled(t).is_some());

        // Typed and erased a character inside the window
        sync.search_input("gann".to_string());
        let t = sync.search_input("gan".to_string());
        assert!(sync.search_settled(t).is_none());
    }

    #[test]
    fn test_page_does_not_reset_on_search() {
        let mut sync = loaded(5);
        let next = sync.go_to(PageMove::Next).unwrap();
        assert_eq!(next.query.page, 2);
        sync.complete(next.seq, Ok(make_page(9, 5)));

        let t = sync.search_input("diffusion".to_string());
        let fetch = sync.search_settled(t).unwrap();
        assert_eq!(fetch.query.page, 2);
    }

    #[test]
    fn test_boundary_moves_issue_nothing() {
        let mut sync = loaded(2);
        assert!(sync.go_to(PageMove::Prev).is_none());
        assert!(sync.go_to(PageMove::First).is_none());
        assert_eq!(sync.query().page, 1);

        let last = sync.go_to(PageMove::Last).unwrap();
        sync.complete(last.seq, Ok(make_page(2, 2)));
        assert!(sync.go_to(PageMove::Next).is_none());
        assert_eq!(sync.query().page, 2);
    }

    #[test]
    fn test_unchanged_sort_does_not_fetch() {
        let mut sync = loaded(1);
        assert!(sync.set_sort(None).is_none());
        assert!(sync.set_sort(Some(SortKey::Title)).is_some());
        assert!(sync.set_sort(Some(SortKey::Title)).is_none());
    }

    #[test]
    fn test_failure_clears_articles_and_retry_replays() {
        let mut sync = loaded(3);
        let next = sync.go_to(PageMove::Next).unwrap();

        assert!(sync.complete(next.seq, Err(FetchError::Status(500))));
        assert!(sync.articles().is_empty());
        assert!(sync.error().unwrap().contains("500"));

        let retry = sync.retry().unwrap();
        assert_eq!(retry.query, next.query);
        assert!(retry.seq > next.seq);
        assert!(sync.is_loading());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut sync = loaded(10);
        let page2 = sync.go_to(PageMove::Next).unwrap();
        let page3 = sync.go_to(PageMove::Next).unwrap();

        // Page 3 lands first, then the slow page 2 response
        assert!(sync.complete(page3.seq, Ok(make_page(1, 10))));
        assert!(!sync.complete(page2.seq, Ok(make_page(9, 10))));
        assert_eq!(sync.articles().len(), 1);
        assert_eq!(sync.query().page, 3);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut sync = loaded(10);
        let old = sync.go_to(PageMove::Next).unwrap();
        let new = sync.go_to(PageMove::Next).unwrap();

        assert!(sync.complete(new.seq, Ok(make_page(4, 10))));
        assert!(!sync.complete(old.seq, Err(FetchError::Network("offline".to_string()))));
        assert_eq!(sync.status(), &FetchStatus::Loaded);
        assert_eq!(sync.articles().len(), 4);
    }

    #[test]
    fn test_favorites_view_issues_no_requests() {
        let mut sync = loaded(5);
        assert!(sync.set_favorites_view(true).is_none());

        let t = sync.search_input("rl".to_string());
        assert!(sync.search_settled(t).is_none());
        assert!(sync.set_sort(Some(SortKey::Title)).is_none());
        assert!(sync.go_to(PageMove::Next).is_none());
        assert!(sync.retry().is_none());
        assert_eq!(sync.status(), &FetchStatus::Loaded);
    }

    #[test]
    fn test_leaving_favorites_view_fetches_only_when_query_changed() {
        let mut sync = loaded(5);
        sync.set_favorites_view(true);
        assert!(sync.set_favorites_view(false).is_none());

        sync.set_favorites_view(true);
        sync.set_sort(Some(SortKey::Date));
        let fetch = sync.set_favorites_view(false).unwrap();
        assert_eq!(fetch.query.sort, Some(SortKey::Date));
    }

    #[test]
    fn test_visible_articles_in_favorites_view() {
        let mut sync = loaded(1);
        let mut favorites = Favorites::new(IdentityPolicy::Strict);
        let third = sync.articles()[2].clone();
        favorites.toggle(&third, 2);

        assert_eq!(sync.visible_articles(&favorites).len(), 9);

        sync.set_favorites_view(true);
        let visible = sync.visible_articles(&favorites);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, 2);
        assert_eq!(visible[0].1, third);
    }
}
