//! Favorites
//!
//! Set of favorited article identities, kept in insertion order so the
//! persisted JSON array stays stable between saves.

use crate::models::Article;

/// How to identify an article that has neither a link nor a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityPolicy {
    /// Such articles cannot be favorited
    #[default]
    Strict,
    /// Fall back to the article's position on the page. Unstable across
    /// pages and sort orders.
    PositionalFallback,
}

/// `link`, else `title`, else (policy permitting) the positional index
pub fn article_identity(article: &Article, index: usize, policy: IdentityPolicy) -> Option<String> {
    if !article.link.is_empty() {
        return Some(article.link.clone());
    }
    if !article.title.is_empty() {
        return Some(article.title.clone());
    }
    match policy {
        IdentityPolicy::Strict => None,
        IdentityPolicy::PositionalFallback => Some(index.to_string()),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    ids: Vec<String>,
    policy: IdentityPolicy,
}

impl Favorites {
    pub fn new(policy: IdentityPolicy) -> Self {
        Self { ids: Vec::new(), policy }
    }

    /// Build from persisted ids, dropping duplicates but keeping first-seen order
    pub fn from_ids(ids: Vec<String>, policy: IdentityPolicy) -> Self {
        let mut favorites = Self::new(policy);
        for id in ids {
            if !favorites.contains_id(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    pub fn identity(&self, article: &Article, index: usize) -> Option<String> {
        article_identity(article, index, self.policy)
    }

    pub fn can_favorite(&self, article: &Article, index: usize) -> bool {
        self.identity(article, index).is_some()
    }

    pub fn is_favorite(&self, article: &Article, index: usize) -> bool {
        self.identity(article, index)
            .is_some_and(|id| self.contains_id(&id))
    }

    /// Flip membership. Returns the new state, or `None` if the article has
    /// no usable identity.
    pub fn toggle(&mut self, article: &Article, index: usize) -> Option<bool> {
        let id = self.identity(article, index)?;
        if let Some(pos) = self.ids.iter().position(|f| *f == id) {
            self.ids.remove(pos);
            Some(false)
        } else {
            self.ids.push(id);
            Some(true)
        }
    }
}
