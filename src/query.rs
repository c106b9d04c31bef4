//! Query State
//!
//! User-facing filter/sort/page parameters and the request they map to.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters left unescaped in query values (RFC 3986 unreserved set)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Server-side sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Date,
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Date, SortKey::Title];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Title => "title",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Date => "Date",
            SortKey::Title => "Title",
        }
    }

    /// Parse a `<select>` value; anything unknown (including "") means no sort
    pub fn parse(value: &str) -> Option<Self> {
        SortKey::ALL.into_iter().find(|k| k.as_str() == value)
    }
}

/// Parameters the user manipulates.
///
/// `search_term` tracks every keystroke; `debounced_search` only changes once
/// typing has been quiet for the debounce period, and is the one sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub search_term: String,
    pub debounced_search: String,
    pub sort: Option<SortKey>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            search_term: String::new(),
            debounced_search: String::new(),
            sort: None,
        }
    }
}

impl QueryState {
    pub fn request(&self, limit: u32) -> ArticleQuery {
        ArticleQuery {
            page: self.page,
            limit,
            search: Some(self.debounced_search.clone()).filter(|s| !s.is_empty()),
            sort: self.sort,
        }
    }
}

/// Snapshot of one `/news/arxiv` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}

impl ArticleQuery {
    /// `page=..&limit=..[&search=..][&sort=..]`
    pub fn to_query_string(&self) -> String {
        let mut out = format!("page={}&limit={}", self.page, self.limit);
        if let Some(search) = &self.search {
            out.push_str("&search=");
            out.push_str(&encode_query_value(search));
        }
        if let Some(sort) = self.sort {
            out.push_str("&sort=");
            out.push_str(sort.as_str());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_query_string() {
        let state = QueryState {
            page: 1,
            search_term: "transformer".to_string(),
            debounced_search: "transformer".to_string(),
            sort: Some(SortKey::Date),
        };
        assert_eq!(
            state.request(9).to_query_string(),
            "page=1&limit=9&search=transformer&sort=date"
        );
    }

    #[test]
    fn test_empty_search_and_sort_are_omitted() {
        let state = QueryState {
            page: 3,
            // Raw input is not sent until debounced
            search_term: "pending".to_string(),
            ..Default::default()
        };
        let query = state.request(9);
        assert_eq!(query.search, None);
        assert_eq!(query.to_query_string(), "page=3&limit=9");
    }

    #[test]
    fn test_search_value_is_encoded() {
        let state = QueryState {
            debounced_search: "graph neural & co".to_string(),
            sort: Some(SortKey::Title),
            ..Default::default()
        };
        assert_eq!(
            state.request(9).to_query_string(),
            "page=1&limit=9&search=graph%20neural%20%26%20co&sort=title"
        );
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("date"), Some(SortKey::Date));
        assert_eq!(SortKey::parse("title"), Some(SortKey::Title));
        assert_eq!(SortKey::parse(""), None);
        assert_eq!(SortKey::parse("relevance"), None);
    }
}
