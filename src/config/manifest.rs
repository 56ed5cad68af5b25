//! `[manifest]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[manifest]` section in folio.toml - web app manifest fields.
///
/// `name` and `short_name` fall back to `[base].title` when empty.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path, relative to the output directory until normalized.
    #[serde(default = "defaults::manifest::path")]
    #[educe(Default = defaults::manifest::path())]
    pub path: PathBuf,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub short_name: String,

    #[serde(default = "defaults::manifest::start_url")]
    #[educe(Default = defaults::manifest::start_url())]
    pub start_url: String,

    #[serde(default = "defaults::manifest::background_color")]
    #[educe(Default = defaults::manifest::background_color())]
    pub background_color: String,

    #[serde(default = "defaults::manifest::theme_color")]
    #[educe(Default = defaults::manifest::theme_color())]
    pub theme_color: String,

    #[serde(default = "defaults::manifest::display")]
    #[educe(Default = defaults::manifest::display())]
    pub display: String,

    /// Icon file relative to the project root, copied into the output root.
    #[serde(default)]
    pub icon: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_manifest_defaults() {
        let manifest = ManifestConfig::default();
        assert!(manifest.enable);
        assert_eq!(manifest.start_url, "/");
        assert_eq!(manifest.background_color, "#06b6d4");
        assert_eq!(manifest.theme_color, "#e11d48");
        assert_eq!(manifest.display, "standalone");
        assert!(manifest.icon.is_none());
    }

    #[test]
    fn test_manifest_config() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "Test"

            [manifest]
            name = "miyauci.me"
            display = "minimal-ui"
            icon = "static/favicon.svg"
        "#,
        )
        .unwrap();

        assert_eq!(config.manifest.name, "miyauci.me");
        assert_eq!(config.manifest.display, "minimal-ui");
        assert_eq!(
            config.manifest.icon,
            Some(PathBuf::from("static/favicon.svg"))
        );
    }
}
