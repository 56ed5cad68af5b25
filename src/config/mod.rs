//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section            | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | `[base]`           | Site metadata (title, author, url)           |
//! | `[build]`          | Content/output paths, minify, sitemap        |
//! | `[i18n]`           | Default language and locales                 |
//! | `[theme]`          | Dark mode storage key and class names        |
//! | `[manifest]`       | Web app manifest                             |
//! | `[extra]`          | User-defined custom fields                   |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "miyauci.me"
//! url = "https://example.com"
//!
//! [build]
//! content = "posts"
//!
//! [i18n]
//! default_lang = "en"
//! locales = ["en", "ja"]
//!
//! [theme]
//! storage_key = "darkMode"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod i18n;
mod manifest;
mod theme;

pub use error::ConfigError;
pub use i18n::I18nConfig;
pub use theme::ThemeConfig;

use base::BaseConfig;
use build::BuildConfig;
use manifest::ManifestConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Locale routing
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Dark mode preference
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Web app manifest
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };
        self.update_path_with_root(cli, &root);

        match &cli.command {
            Commands::Build {
                clean,
                minify,
                sitemap,
                base_url,
            } => {
                self.build.clean |= *clean;
                Self::update_option(&mut self.build.minify, minify.as_ref());
                Self::update_option(&mut self.build.sitemap.enable, sitemap.as_ref());
                if let Some(url) = base_url {
                    self.base.url = Some(url.clone());
                }
            }
            Commands::Theme {
                storage: Some(storage),
                ..
            } => {
                self.theme.storage = Self::expand_path(&root, storage);
            }
            _ => {}
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, cli: &Cli, root: &Path) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.sitemap.path = self.build.output.join(&self.build.sitemap.path);
        self.manifest.path = self.build.output.join(&self.manifest.path);
        self.theme.noflash_path = self.build.output.join(&self.theme.noflash_path);
        self.theme.storage = Self::expand_path(&root, &self.theme.storage);

        if let Some(icon) = self.manifest.icon.as_ref() {
            self.manifest.icon = Some(Self::normalize_path(&root.join(icon)));
        }
    }

    /// Expand `~` and resolve relative paths against the root.
    fn expand_path(root: &Path, path: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);
        if path.is_relative() {
            Self::normalize_path(&root.join(path))
        } else {
            Self::normalize_path(&path)
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        let priority = self.build.sitemap.priority;
        if !(0.0..=1.0).contains(&priority) {
            bail!(ConfigError::Validation(format!(
                "[build.sitemap.priority] must be within 0.0..=1.0, got {priority}"
            )));
        }

        if self.i18n.locales.is_empty() {
            bail!(ConfigError::Validation(
                "[i18n.locales] must have at least one element".into()
            ));
        }
        if !self.i18n.is_locale(&self.i18n.default_lang) {
            bail!(ConfigError::Validation(format!(
                "[i18n.default_lang] `{}` is not listed in [i18n.locales]",
                self.i18n.default_lang
            )));
        }

        if self.theme.storage_key.is_empty() {
            bail!(ConfigError::Validation(
                "[theme.storage_key] must not be empty".into()
            ));
        }
        if self.theme.class_dark.is_empty()
            || self.theme.class_light.is_empty()
            || self.theme.class_dark == self.theme.class_light
        {
            bail!(ConfigError::Validation(
                "[theme.class_dark] and [theme.class_light] must be distinct, non-empty classes"
                    .into()
            ));
        }

        let needs_base_url = self
            .cli
            .is_some_and(|cli| matches!(cli.command, Commands::Build { .. } | Commands::Sitemap { .. }));
        if needs_base_url && self.build.sitemap.enable && self.base.url.is_none() {
            bail!("[base.url] is required for sitemap generation");
        }

        if let Some(icon) = &self.manifest.icon
            && self.manifest.enable
            && !icon.is_file()
        {
            bail!(ConfigError::Validation(format!(
                "[manifest.icon] `{}` is not a file",
                icon.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
