//! Site-wide presentation settings.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Site presentation options.
///
/// Every field is optional; unset fields are left to the site theme.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: Option<String>,
    /// Site description (meta description).
    pub description: Option<String>,
    /// Base URL used in the generated sitemap (e.g., `https://notes.example.com`).
    pub sitemap_host: Option<String>,
    /// Extra elements injected into every page's `<head>`.
    pub head: Vec<HeadEntry>,
    /// Search provider settings.
    pub search: Option<SearchConfig>,
    /// Footer text.
    pub footer: Option<String>,
    /// Pattern for "edit this page" links, e.g.
    /// `https://github.com/org/notes/edit/main/docs/:path`.
    pub edit_link_pattern: Option<String>,
}

/// An element injected into the page `<head>`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct HeadEntry {
    /// Tag name (e.g., "link", "meta", "script").
    pub tag: String,
    /// Tag attributes.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    /// Inner content, for tags such as `script`.
    pub content: Option<String>,
}

/// Search provider configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Provider name (e.g., "local", "algolia").
    pub provider: String,
    /// Provider-specific options (e.g., `app_id`, `index_name`).
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}
