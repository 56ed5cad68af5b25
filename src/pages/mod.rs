//! Page graph: the flat list of generated pages fed to the sitemap.
//!
//! Every page carries its rendered `path`, its `locale`, and the
//! locale-invariant `original_path` shared by all translations of a
//! document.
//!
//! ```text
//! content/posts/hello/index.mdx     → /posts/hello/     (en, /posts/hello/)
//! content/posts/hello/index.ja.mdx  → /ja/posts/hello/  (ja, /posts/hello/)
//! ```

mod discover;
mod query;

pub use discover::discover;
pub use query::from_query_json;

use crate::config::I18nConfig;

/// A generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Locale-specific rendered URL path (e.g. `/ja/posts/hello/`)
    pub path: String,
    /// Short language tag (e.g. `ja`)
    pub locale: String,
    /// Locale-invariant identity; `None` when the source did not provide one
    pub original_path: Option<String>,
}

impl Page {
    pub fn new(path: impl Into<String>, locale: impl Into<String>, original_path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            locale: locale.into(),
            original_path: Some(original_path.into()),
        }
    }
}

/// Collection of all pages in the site, in discovery order.
#[derive(Debug, Default, Clone)]
pub struct Pages {
    pub items: Vec<Page>,
}

impl Pages {
    /// Get iterator over pages.
    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.items.iter()
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop pages excluded from the sitemap (error pages), matched against
    /// either the rendered or the original path.
    pub fn retain_sitemap(&mut self, exclude: &[String]) {
        self.items.retain(|page| {
            !exclude.iter().any(|e| {
                *e == page.path || page.original_path.as_deref() == Some(e.as_str())
            })
        });
    }
}

impl From<Vec<Page>> for Pages {
    fn from(items: Vec<Page>) -> Self {
        Self { items }
    }
}

/// Rendered path of `original_path` in `locale`.
///
/// The default language is served unprefixed; other locales get `/{locale}`.
pub fn localize_path(original_path: &str, locale: &str, i18n: &I18nConfig) -> String {
    if i18n.is_default(locale) {
        return original_path.to_string();
    }
    let rest = original_path.trim_start_matches('/');
    if rest.is_empty() {
        format!("/{locale}/")
    } else {
        format!("/{locale}/{rest}")
    }
}
