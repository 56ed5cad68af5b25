//! `[i18n]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[i18n]` section in folio.toml - locale routing.
///
/// # Example
/// ```toml
/// [i18n]
/// default_lang = "en"
/// locales = ["en", "ja"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct I18nConfig {
    /// Locale served without a path prefix.
    #[serde(default = "defaults::i18n::default_lang")]
    #[educe(Default = defaults::i18n::default_lang())]
    pub default_lang: String,

    /// All locales, in the order alternates of discovered pages are listed.
    #[serde(default = "defaults::i18n::locales")]
    #[educe(Default = defaults::i18n::locales())]
    pub locales: Vec<String>,
}

impl I18nConfig {
    pub fn is_locale(&self, tag: &str) -> bool {
        self.locales.iter().any(|locale| locale == tag)
    }

    pub fn is_default(&self, tag: &str) -> bool {
        self.default_lang == tag
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_i18n_defaults() {
        let i18n = I18nConfig::default();
        assert_eq!(i18n.default_lang, "en");
        assert_eq!(i18n.locales, vec!["en", "ja"]);
        assert!(i18n.is_locale("ja"));
        assert!(!i18n.is_locale("fr"));
        assert!(i18n.is_default("en"));
    }

    #[test]
    fn test_i18n_config() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "Test"

            [i18n]
            default_lang = "ja"
            locales = ["ja", "en", "fr"]
        "#,
        )
        .unwrap();

        assert_eq!(config.i18n.default_lang, "ja");
        assert!(config.i18n.is_locale("fr"));
        assert!(!config.i18n.is_default("en"));
    }
}
