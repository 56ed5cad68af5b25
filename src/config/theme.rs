//! `[theme]` section configuration.
//!
//! Storage key and class names of the dark mode preference.

use super::defaults;
use crate::theme::ThemeClasses;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[theme]` section in folio.toml.
///
/// # Example
/// ```toml
/// [theme]
/// storage_key = "darkMode"
/// class_dark = "dark"
/// class_light = "light"
/// noflash = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key the boolean preference is stored under.
    #[serde(default = "defaults::theme::storage_key")]
    #[educe(Default = defaults::theme::storage_key())]
    pub storage_key: String,

    /// Root class while dark.
    #[serde(default = "defaults::theme::class_dark")]
    #[educe(Default = defaults::theme::class_dark())]
    pub class_dark: String,

    /// Root class while light.
    #[serde(default = "defaults::theme::class_light")]
    #[educe(Default = defaults::theme::class_light())]
    pub class_light: String,

    /// Storage file used by `folio theme` (`~` is expanded).
    #[serde(default = "defaults::theme::storage")]
    #[educe(Default = defaults::theme::storage())]
    pub storage: PathBuf,

    /// Write the pre-paint class script into the output directory.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub noflash: bool,

    /// Script path, relative to the output directory until normalized.
    #[serde(default = "defaults::theme::noflash_path")]
    #[educe(Default = defaults::theme::noflash_path())]
    pub noflash_path: PathBuf,

    /// Edge length in pixels of the toggle and its placeholder.
    #[serde(default = "defaults::theme::toggle_size")]
    #[educe(Default = defaults::theme::toggle_size())]
    pub toggle_size: u32,
}

impl ThemeConfig {
    pub fn classes(&self) -> ThemeClasses {
        ThemeClasses {
            dark: self.class_dark.clone(),
            light: self.class_light.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.storage_key, "darkMode");
        assert_eq!(theme.class_dark, "dark");
        assert_eq!(theme.class_light, "light");
        assert!(theme.noflash);
        assert_eq!(theme.toggle_size, 30);
    }

    #[test]
    fn test_theme_config() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "Test"

            [theme]
            storage_key = "prefers-dark"
            class_dark = "theme-dark"
            class_light = "theme-light"
            noflash = false
            toggle_size = 24
        "#,
        )
        .unwrap();

        let classes = config.theme.classes();
        assert_eq!(config.theme.storage_key, "prefers-dark");
        assert_eq!(classes.dark, "theme-dark");
        assert_eq!(classes.light, "theme-light");
        assert!(!config.theme.noflash);
        assert_eq!(config.theme.toggle_size, 24);
    }
}
