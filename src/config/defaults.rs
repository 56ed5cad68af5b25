//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub mod sitemap {
        use crate::generator::sitemap::ChangeFrequency;
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }

        pub fn exclude() -> Vec<String> {
            vec!["/404/".into(), "/404.html".into()]
        }

        pub fn changefreq() -> ChangeFrequency {
            ChangeFrequency::Hourly
        }

        pub fn priority() -> f32 {
            1.0
        }
    }
}

// ============================================================================
// [i18n] Section Defaults
// ============================================================================

pub mod i18n {
    pub fn default_lang() -> String {
        "en".into()
    }

    pub fn locales() -> Vec<String> {
        vec!["en".into(), "ja".into()]
    }
}

// ============================================================================
// [theme] Section Defaults
// ============================================================================

pub mod theme {
    use std::path::PathBuf;

    pub fn storage_key() -> String {
        "darkMode".into()
    }

    pub fn class_dark() -> String {
        "dark".into()
    }

    pub fn class_light() -> String {
        "light".into()
    }

    pub fn storage() -> PathBuf {
        "~/.folio/storage.json".into()
    }

    pub fn noflash_path() -> PathBuf {
        "noflash.js".into()
    }

    pub fn toggle_size() -> u32 {
        30
    }
}

// ============================================================================
// [manifest] Section Defaults
// ============================================================================

pub mod manifest {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "manifest.webmanifest".into()
    }

    pub fn start_url() -> String {
        "/".into()
    }

    pub fn background_color() -> String {
        "#06b6d4".into()
    }

    pub fn theme_color() -> String {
        "#e11d48".into()
    }

    pub fn display() -> String {
        "standalone".into()
    }
}
