//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "miyauci.me"
/// description = "Personal site"
/// author = "Alice"
/// url = "https://example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, also the manifest name.
    pub title: String,

    /// Author name.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Site description.
    #[serde(default)]
    pub description: String,

    /// Base URL for absolute links in the sitemap.
    /// Required when `[build.sitemap].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Copyright notice for site footer.
    #[serde(default)]
    pub copyright: String,
}
