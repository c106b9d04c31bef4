//! Frontend Models
//!
//! Data structures matching the news API responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat both a missing field and an explicit `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Authors arrive either as one preformatted string or as a list of names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    One(String),
    Many(Vec<String>),
}

impl Default for Authors {
    fn default() -> Self {
        Authors::One(String::new())
    }
}

impl Authors {
    pub fn is_empty(&self) -> bool {
        match self {
            Authors::One(name) => name.trim().is_empty(),
            Authors::Many(names) => names.iter().all(|n| n.trim().is_empty()),
        }
    }

    /// Single display line, names joined with ", "
    pub fn display(&self) -> String {
        match self {
            Authors::One(name) => name.trim().to_string(),
            Authors::Many(names) => names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Article summary as returned by `/news/arxiv`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    /// Kept verbatim; the API sends a preformatted timestamp
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Authors,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
}

impl Article {
    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

/// One page of results from `/news/arxiv`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArticlePage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

/// Extracted article text from `/news/article`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FullArticle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}
