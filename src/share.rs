//! Share Commands
//!
//! Native share sheet when the browser has one, otherwise copy the link to the
//! clipboard. Callers log failures; they are never shown to the user.

use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::ShareError;
use crate::models::Article;

pub const COPIED_MESSAGE: &str = "Link copied to clipboard!";

/// Argument to `navigator.share`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl From<&Article> for SharePayload {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            text: article.summary.clone(),
            url: article.link.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

fn js_error(value: JsValue) -> ShareError {
    ShareError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Look up `target[name]` as a callable
fn method(target: &JsValue, name: &str) -> Result<Option<Function>, ShareError> {
    let value = Reflect::get(target, &JsValue::from_str(name)).map_err(js_error)?;
    Ok(value.dyn_into::<Function>().ok())
}

async fn await_promise(value: JsValue) -> Result<JsValue, ShareError> {
    let promise: Promise = value.dyn_into().map_err(js_error)?;
    JsFuture::from(promise).await.map_err(js_error)
}

pub async fn share_article(article: &Article) -> Result<ShareOutcome, ShareError> {
    let payload = SharePayload::from(article);
    let window = web_sys::window().ok_or(ShareError::NoWindow)?;
    let navigator: JsValue = window.navigator().into();

    if let Some(share) = method(&navigator, "share")? {
        let data = serde_wasm_bindgen::to_value(&payload).map_err(|e| ShareError::Js(e.to_string()))?;
        await_promise(share.call1(&navigator, &data).map_err(js_error)?).await?;
        return Ok(ShareOutcome::Shared);
    }

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_error)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ShareError::NoClipboard);
    }
    let write_text = method(&clipboard, "writeText")?.ok_or(ShareError::NoClipboard)?;
    await_promise(
        write_text
            .call1(&clipboard, &JsValue::from_str(&payload.url))
            .map_err(js_error)?,
    )
    .await?;

    window.alert_with_message(COPIED_MESSAGE).map_err(js_error)?;
    Ok(ShareOutcome::Copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Authors;

    #[test]
    fn test_payload_from_article() {
        let article = Article {
            title: "Paper A".to_string(),
            link: "https://arxiv.org/abs/1".to_string(),
            summary: "We propose...".to_string(),
            authors: Authors::One("Jane Doe".to_string()),
            ..Default::default()
        };
        assert_eq!(
            SharePayload::from(&article),
            SharePayload {
                title: "Paper A".to_string(),
                text: "We propose...".to_string(),
                url: "https://arxiv.org/abs/1".to_string(),
            }
        );
    }
}
