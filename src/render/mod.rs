//! Server-side HTML rendering.
//!
//! Pages are plain functions from display data to a `String`. Shared chrome
//! lives in [`components`]; navigation and footer link sets in [`nav`].
//! Anything interpolated into markup goes through [`text`] or [`attr`].

pub mod components;
pub mod nav;
pub mod pages;

use std::borrow::Cow;

use crate::config::SiteConfig;

/// Escapes a value for use in a text node.
#[must_use]
pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Escapes a value for use inside a double-quoted attribute.
#[must_use]
pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Site-wide values every page needs for its chrome.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub site: SiteConfig,
    pub year: i32,
}

impl PageContext {
    #[must_use]
    pub fn new(site: SiteConfig) -> Self {
        use chrono::Datelike;
        Self {
            site,
            year: chrono::Utc::now().year(),
        }
    }

    /// Versioned URL for an embedded asset under `/assets/`.
    #[must_use]
    pub fn asset(&self, path: &str) -> String {
        format!(
            "/assets/{}?v={}",
            path.trim_start_matches('/'),
            urlencoding::encode(&self.site.asset_version)
        )
    }
}

/// Simple English plural for counts shown on cards.
#[must_use]
pub fn pluralize(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
pub(crate) fn test_context() -> PageContext {
    let mut site = SiteConfig::default();
    site.base_url = "https://directory.test".to_string();
    site.asset_version = "1".to_string();
    PageContext { site, year: 2026 }
}
