//! News API Client
//!
//! Thin wrapper over the browser `fetch` for the two news endpoints.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::FetchError;
use crate::models::{ArticlePage, FullArticle};
use crate::query::{encode_query_value, ArticleQuery};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiClient {
    base: &'static str,
}

impl ApiClient {
    pub fn new(base: &'static str) -> Self {
        Self { base }
    }

    pub fn articles_url(&self, query: &ArticleQuery) -> String {
        format!("{}/news/arxiv?{}", self.base, query.to_query_string())
    }

    pub fn full_article_url(&self, link: &str) -> String {
        format!("{}/news/article?url={}", self.base, encode_query_value(link))
    }

    pub async fn fetch_articles(&self, query: &ArticleQuery) -> Result<ArticlePage, FetchError> {
        get_json(&self.articles_url(query)).await
    }

    pub async fn fetch_full_article(&self, link: &str) -> Result<FullArticle, FetchError> {
        get_json(&self.full_article_url(link)).await
    }
}

fn js_error(value: JsValue) -> FetchError {
    FetchError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| FetchError::Network("no browser window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(|e| FetchError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
}
