//! Dark mode preference.
//!
//! The preference is a tri-state that starts [`Preference::Unknown`] and
//! resolves once the persisted value has been read:
//!
//! ```text
//!            initialize()
//! Unknown ───────────────► Light ◄──toggle()──► Dark
//!                     └──► Dark
//! ```
//!
//! Consumers render a same-size placeholder while the state is unknown
//! (see [`ToggleView`]).

mod controller;
mod script;
mod store;
mod view;

pub use controller::{ClassList, DarkModeController, ThemeTarget};
pub use script::{build_noflash, noflash_script};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
pub use view::ToggleView;

use std::fmt;

/// Observed dark mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preference {
    /// Persisted value not read yet (server render, pre-hydration)
    #[default]
    Unknown,
    Light,
    Dark,
}

impl Preference {
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Stored boolean encoding; `None` while unknown.
    pub const fn as_dark(self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::Light => Some(false),
            Self::Dark => Some(true),
        }
    }

    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Opposite resolved value; `Unknown` stays `Unknown`.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Unknown => Self::Unknown,
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "unknown",
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Root class tokens for each resolved preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeClasses {
    pub dark: String,
    pub light: String,
}

impl Default for ThemeClasses {
    fn default() -> Self {
        Self {
            dark: "dark".into(),
            light: "light".into(),
        }
    }
}

impl ThemeClasses {
    /// `(active, inactive)` tokens for a resolved preference.
    pub fn tokens(&self, dark: bool) -> (&str, &str) {
        if dark {
            (&self.dark, &self.light)
        } else {
            (&self.light, &self.dark)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_encoding() {
        assert_eq!(Preference::from_dark(true), Preference::Dark);
        assert_eq!(Preference::from_dark(false), Preference::Light);
        assert_eq!(Preference::Dark.as_dark(), Some(true));
        assert_eq!(Preference::Light.as_dark(), Some(false));
        assert_eq!(Preference::Unknown.as_dark(), None);
    }

    #[test]
    fn test_preference_flip() {
        assert_eq!(Preference::Dark.flipped(), Preference::Light);
        assert_eq!(Preference::Light.flipped(), Preference::Dark);
        assert_eq!(Preference::Unknown.flipped(), Preference::Unknown);
        assert!(!Preference::default().is_resolved());
    }

    #[test]
    fn test_theme_class_tokens() {
        let classes = ThemeClasses::default();
        assert_eq!(classes.tokens(true), ("dark", "light"));
        assert_eq!(classes.tokens(false), ("light", "dark"));
    }

    #[test]
    fn test_preference_display() {
        assert_eq!(Preference::Unknown.to_string(), "unknown");
        assert_eq!(Preference::Dark.to_string(), "dark");
    }
}
