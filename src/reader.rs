//! Full-Article Reader
//!
//! State for the side panel that shows extracted article text from
//! `/news/article`.

use crate::error::FetchError;
use crate::models::FullArticle;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReaderState {
    #[default]
    Closed,
    Loading { link: String, title: String },
    Open { link: String, article: FullArticle },
    Failed { link: String, message: String },
}

impl ReaderState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ReaderState::Closed)
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            ReaderState::Closed => None,
            ReaderState::Loading { link, .. }
            | ReaderState::Open { link, .. }
            | ReaderState::Failed { link, .. } => Some(link.as_str()),
        }
    }

    /// Start loading `link`. Returns `false` if that link is already shown or loading.
    pub fn open(&mut self, link: &str, title: &str) -> bool {
        if self.link() == Some(link) && !matches!(self, ReaderState::Failed { .. }) {
            return false;
        }
        *self = ReaderState::Loading {
            link: link.to_string(),
            title: title.to_string(),
        };
        true
    }

    /// Apply a finished load. Ignored unless still loading the same link.
    pub fn resolve(&mut self, link: &str, result: Result<FullArticle, FetchError>) -> bool {
        match self {
            ReaderState::Loading { link: pending, .. } if pending.as_str() == link => {}
            _ => return false,
        }
        let link = link.to_string();
        *self = match result {
            Ok(article) => ReaderState::Open { link, article },
            Err(e) => ReaderState::Failed {
                link,
                message: e.to_string(),
            },
        };
        true
    }

    pub fn close(&mut self) {
        *self = ReaderState::Closed;
    }
}
