//! `[build]` section configuration.
//!
//! Contains output paths, minification and sitemap settings.

use super::defaults;
use crate::generator::sitemap::ChangeFrequency;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "posts"
/// output = "public"
/// minify = true
///
/// [build.sitemap]
/// exclude = ["/404/", "/404.html"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content source directory (Markdown / MDX files).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify generated XML.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// `[build.sitemap]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path, relative to the output directory until the config is normalized.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,

    /// Original paths that never appear in the sitemap.
    #[serde(default = "defaults::build::sitemap::exclude")]
    #[educe(Default = defaults::build::sitemap::exclude())]
    pub exclude: Vec<String>,

    #[serde(default = "defaults::build::sitemap::changefreq")]
    #[educe(Default = defaults::build::sitemap::changefreq())]
    pub changefreq: ChangeFrequency,

    #[serde(default = "defaults::build::sitemap::priority")]
    #[educe(Default = defaults::build::sitemap::priority())]
    pub priority: f32,
}
