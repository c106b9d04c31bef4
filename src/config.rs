//! App Configuration
//!
//! Compile-time settings. `NEWS_HUB_API_BASE`, `NEWS_HUB_LOG` and
//! `NEWS_HUB_IDENTITY` may be set when building the WASM bundle to override
//! the defaults.

use log::LevelFilter;
use std::str::FromStr;

use crate::favorites::IdentityPolicy;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PAGE_SIZE: u32 = 9;
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// News API origin, without trailing slash
    pub api_base: &'static str,
    pub page_size: u32,
    /// Search input quiet period
    pub debounce_ms: u32,
    pub log_level: LevelFilter,
    pub identity_policy: IdentityPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE,
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_level: LevelFilter::Info,
            identity_policy: IdentityPolicy::Strict,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_overrides(
            option_env!("NEWS_HUB_API_BASE"),
            option_env!("NEWS_HUB_LOG"),
            option_env!("NEWS_HUB_IDENTITY"),
        )
    }

    fn with_overrides(api_base: Option<&'static str>, log_level: Option<&str>, identity: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/');
        }
        if let Some(level) = log_level {
            match LevelFilter::from_str(level.trim()) {
                Ok(level) => config.log_level = level,
                // Logger is not up yet
                Err(_) => web_sys::console::warn_1(&format!("[Config] Unknown log level {:?}", level).into()),
            }
        }
        // "positional" lets articles without link or title be favorited by index
        if identity.map(str::trim) == Some("positional") {
            config.identity_policy = IdentityPolicy::PositionalFallback;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::with_overrides(None, None, None);
        assert_eq!(config.api_base, "http://127.0.0.1:8000");
        assert_eq!(config.page_size, 9);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.identity_policy, IdentityPolicy::Strict);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::with_overrides(Some("https://news.example.org/api/"), Some("debug"), Some("positional"));
        assert_eq!(config.api_base, "https://news.example.org/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.identity_policy, IdentityPolicy::PositionalFallback);
    }

    #[test]
    fn test_blank_base_is_ignored() {
        let config = AppConfig::with_overrides(Some("  "), None, Some("strict"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.identity_policy, IdentityPolicy::Strict);
    }
}
