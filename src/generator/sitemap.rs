//! Multilingual sitemap generation.
//!
//! Every page becomes one `<url>` entry. Pages sharing an original path are
//! translations of the same document, and each of them lists the whole
//! family (itself included) as `hreflang` alternates.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/about/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>hourly</changefreq>
//!     <priority>1.0</priority>
//!     <xhtml:link rel="alternate" hreflang="en" href="https://example.com/about/"/>
//!     <xhtml:link rel="alternate" hreflang="ja" href="https://example.com/ja/about/"/>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    log,
    pages::{Page, Pages},
    utils::{minify::minify_xml, xml},
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// XML namespace carrying the alternate links
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

// ============================================================================
// Types
// ============================================================================

/// `<changefreq>` values of the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    #[default]
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// One language variant of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLink {
    pub locale: String,
    pub url: String,
}

impl AlternateLink {
    fn of(page: &Page) -> Self {
        Self {
            locale: page.locale.clone(),
            url: page.path.clone(),
        }
    }
}

/// A sitemap `<url>` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Page path, made absolute when serialized
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    /// Within `0.0..=1.0`
    pub priority: f32,
    /// Every page of the family, in input order, including this one
    pub alternate_links: Vec<AlternateLink>,
}

impl SitemapEntry {
    /// `lastmod` as `YYYY-MM-DD`.
    pub fn lastmod(&self) -> String {
        self.last_modified.format("%Y-%m-%d").to_string()
    }
}

/// Values shared by all entries of one run.
#[derive(Debug, Clone, Copy)]
pub struct EntrySettings {
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

impl Default for EntrySettings {
    fn default() -> Self {
        Self {
            change_frequency: ChangeFrequency::Hourly,
            priority: 1.0,
        }
    }
}

impl EntrySettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            change_frequency: config.build.sitemap.changefreq,
            priority: config.build.sitemap.priority,
        }
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Build one entry per page, in input order.
///
/// The alternates of a page are all pages with the same original path, in
/// input order. A page without an original path is only its own alternate.
pub fn aggregate(pages: &Pages, today: NaiveDate, settings: EntrySettings) -> Vec<SitemapEntry> {
    let mut families: FxHashMap<&str, Vec<AlternateLink>> = FxHashMap::default();
    for page in pages.iter() {
        if let Some(original) = page.original_path.as_deref() {
            families
                .entry(original)
                .or_default()
                .push(AlternateLink::of(page));
        }
    }

    pages
        .iter()
        .map(|page| {
            let alternate_links = page
                .original_path
                .as_deref()
                .and_then(|original| families.get(original).cloned())
                .unwrap_or_else(|| vec![AlternateLink::of(page)]);
            SitemapEntry {
                url: page.path.clone(),
                last_modified: today,
                change_frequency: settings.change_frequency,
                priority: settings.priority,
                alternate_links,
            }
        })
        .collect()
}

/// [`aggregate`] stamped with the local date of the current day.
pub fn aggregate_today(pages: &Pages, settings: EntrySettings) -> Vec<SitemapEntry> {
    aggregate(pages, Local::now().date_naive(), settings)
}

// ============================================================================
// Public API
// ============================================================================

/// Build sitemap if enabled in config.
///
/// Excluded original paths (error pages) are dropped before aggregation.
pub fn build_sitemap(config: &SiteConfig, pages: &Pages) -> Result<()> {
    if config.build.sitemap.enable {
        write_sitemap(config, pages, &config.build.sitemap.path)?;
    }
    Ok(())
}

/// Aggregate `pages` and write the sitemap to `path`.
pub fn write_sitemap(config: &SiteConfig, pages: &Pages, path: &Path) -> Result<()> {
    let base_url = config
        .base
        .url
        .as_deref()
        .context("[base.url] is required for sitemap generation")?;

    let mut pages = pages.clone();
    pages.retain_sitemap(&config.build.sitemap.exclude);

    let sitemap = Sitemap::from_pages(&pages, EntrySettings::from_config(config));
    let count = sitemap.entries.len();
    let xml = sitemap.into_xml(base_url)?;
    let xml = minify_xml(xml.as_bytes(), config);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, &*xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{} ({count} urls)", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    entries: Vec<SitemapEntry>,
}

impl Sitemap {
    fn from_pages(pages: &Pages, settings: EntrySettings) -> Self {
        Self {
            entries: aggregate_today(pages, settings),
        }
    }

    /// Generate sitemap XML string with URLs made absolute against `base_url`.
    fn into_xml(self, base_url: &str) -> Result<String> {
        let mut writer = xml::create_xml_writer();
        xml::write_decl(&mut writer)?;
        xml::write_start(
            &mut writer,
            "urlset",
            &[("xmlns", SITEMAP_NS), ("xmlns:xhtml", XHTML_NS)],
        )?;

        for entry in self.entries {
            xml::write_start(&mut writer, "url", &[])?;
            xml::write_text_element(&mut writer, "loc", &absolute_url(base_url, &entry.url))?;
            xml::write_text_element(&mut writer, "lastmod", &entry.lastmod())?;
            xml::write_text_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
            xml::write_text_element(&mut writer, "priority", &format_priority(entry.priority))?;
            for link in &entry.alternate_links {
                let href = absolute_url(base_url, &link.url);
                xml::write_empty_elem(
                    &mut writer,
                    "xhtml:link",
                    &[
                        ("rel", "alternate"),
                        ("hreflang", link.locale.as_str()),
                        ("href", href.as_str()),
                    ],
                )?;
            }
            xml::write_end(&mut writer, "url")?;
        }

        xml::write_end(&mut writer, "urlset")?;
        let mut xml = xml::finish(writer);
        xml.push('\n');
        Ok(xml)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Shortest decimal form of `priority`, always with a fractional part (`1.0`, `0.25`).
fn format_priority(priority: f32) -> String {
    let text = priority.to_string();
    if text.contains('.') { text } else { format!("{text}.0") }
}

/// Join a page path onto the site URL, percent-encoding each path segment.
///
/// Paths that are already absolute URLs are kept as-is.
fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let encoded = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/{encoded}", base_url.trim_end_matches('/'))
}

// ============================================================================
// Tests
// ============================================================================
