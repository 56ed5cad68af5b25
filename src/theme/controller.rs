//! Dark mode controller: persisted preference plus root class sync.

use super::{Preference, PreferenceStore, ThemeClasses};
use crate::log;

/// Class list of the document root.
pub trait ThemeTarget {
    /// Add `active` and remove `inactive`.
    fn apply_theme(&mut self, active: &str, inactive: &str);
}

/// In-memory ordered class list (`<html class="...">`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn add(&mut self, token: &str) {
        if !self.contains(token) {
            self.tokens.push(token.to_string());
        }
    }

    pub fn remove(&mut self, token: &str) {
        self.tokens.retain(|t| t != token);
    }

    /// Value of the `class` attribute.
    pub fn to_attr(&self) -> String {
        self.tokens.join(" ")
    }
}

impl ThemeTarget for ClassList {
    fn apply_theme(&mut self, active: &str, inactive: &str) {
        self.remove(inactive);
        self.add(active);
    }
}

impl<T: ThemeTarget + ?Sized> ThemeTarget for &mut T {
    fn apply_theme(&mut self, active: &str, inactive: &str) {
        (**self).apply_theme(active, inactive);
    }
}

/// Owns the preference of one page.
///
/// Construct one per page and hand consumers a reference. Calling
/// [`toggle`](Self::toggle) before [`initialize`](Self::initialize) is a
/// no-op: the state stays [`Preference::Unknown`] and nothing is written.
#[derive(Debug)]
pub struct DarkModeController<S, T> {
    key: String,
    classes: ThemeClasses,
    store: S,
    target: T,
    state: Preference,
    /// Cleared after the first storage failure; the preference then lives in memory only.
    persistent: bool,
}

impl<S: PreferenceStore, T: ThemeTarget> DarkModeController<S, T> {
    pub fn new(key: impl Into<String>, classes: ThemeClasses, store: S, target: T) -> Self {
        Self {
            key: key.into(),
            classes,
            store,
            target,
            state: Preference::Unknown,
            persistent: true,
        }
    }

    /// Resolve the preference from storage, once.
    ///
    /// The stored value wins; with nothing stored, `system_prefers_dark`
    /// decides. Later calls return the current state unchanged.
    pub fn initialize(&mut self, system_prefers_dark: bool) -> Preference {
        if self.state.is_resolved() {
            return self.state;
        }

        let dark = match self.store.load(&self.key) {
            Ok(Some(stored)) => stored,
            Ok(None) => system_prefers_dark,
            Err(err) => {
                self.fall_back_to_memory(&err);
                system_prefers_dark
            }
        };

        self.apply_class(dark);
        self.state = Preference::from_dark(dark);
        self.state
    }

    /// Flip `Light` and `Dark`, persist, and update the root class.
    pub fn toggle(&mut self) -> Preference {
        let Some(dark) = self.state.flipped().as_dark() else {
            return self.state;
        };

        if self.persistent
            && let Err(err) = self.store.save(&self.key, dark)
        {
            self.fall_back_to_memory(&err);
        }
        self.apply_class(dark);
        self.state = Preference::from_dark(dark);
        self.state
    }

    pub const fn current_value(&self) -> Preference {
        self.state
    }

    /// Whether changes still reach durable storage.
    pub const fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn apply_class(&mut self, dark: bool) {
        let (active, inactive) = self.classes.tokens(dark);
        self.target.apply_theme(active, inactive);
    }

    fn fall_back_to_memory(&mut self, err: &dyn std::error::Error) {
        if self.persistent {
            log!("warn"; "{err}, keeping the theme for this session only");
        }
        self.persistent = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{FileStore, MemoryStore, StoreError};
    use std::{collections::BTreeMap, fs, io, path::PathBuf};

    const KEY: &str = "darkMode";

    fn controller(store: MemoryStore) -> DarkModeController<MemoryStore, ClassList> {
        DarkModeController::new(KEY, ThemeClasses::default(), store, ClassList::new())
    }

    /// Storage that is switched off, like a browser with storage disabled.
    #[derive(Default)]
    struct DisabledStore {
        save_calls: usize,
    }

    impl PreferenceStore for DisabledStore {
        fn load(&self, _key: &str) -> Result<Option<bool>, StoreError> {
            Err(disabled())
        }

        fn save(&mut self, _key: &str, _dark: bool) -> Result<(), StoreError> {
            self.save_calls += 1;
            Err(disabled())
        }
    }

    fn disabled() -> StoreError {
        StoreError::Unavailable(
            PathBuf::from("localStorage"),
            io::Error::new(io::ErrorKind::PermissionDenied, "disabled"),
        )
    }

    #[test]
    fn test_starts_unknown() {
        let controller = controller(MemoryStore::new());
        assert_eq!(controller.current_value(), Preference::Unknown);
        assert_eq!(controller.target().to_attr(), "");
    }

    #[test]
    fn test_initialize_without_stored_value_uses_system() {
        let mut controller = controller(MemoryStore::new());
        assert_eq!(controller.initialize(true), Preference::Dark);
        assert!(controller.target().contains("dark"));
        assert!(!controller.target().contains("light"));
        // Nothing is written until the user toggles.
        assert_eq!(controller.store().raw(KEY), None);
    }

    #[test]
    fn test_initialize_stored_value_wins() {
        let mut store = MemoryStore::new();
        store.save(KEY, false).unwrap();
        let mut controller = controller(store);

        assert_eq!(controller.initialize(true), Preference::Light);
        assert_eq!(controller.target().to_attr(), "light");
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut controller = controller(MemoryStore::new());
        controller.initialize(false);
        assert_eq!(controller.initialize(true), Preference::Light);
    }

    #[test]
    fn test_toggle_from_dark() {
        let mut controller = controller(MemoryStore::new());
        controller.initialize(true);

        assert_eq!(controller.toggle(), Preference::Light);
        assert_eq!(controller.current_value(), Preference::Light);
        assert_eq!(controller.store().raw(KEY), Some("false"));
        assert!(controller.target().contains("light"));
        assert!(!controller.target().contains("dark"));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = MemoryStore::new();
        store.save(KEY, true).unwrap();
        let mut controller = controller(store);
        let before = controller.initialize(false);

        controller.toggle();
        controller.toggle();

        assert_eq!(controller.current_value(), before);
        assert_eq!(controller.store().raw(KEY), Some("true"));
        assert_eq!(controller.target().to_attr(), "dark");
    }

    #[test]
    fn test_toggle_before_initialize_is_noop() {
        let mut controller = controller(MemoryStore::new());

        assert_eq!(controller.toggle(), Preference::Unknown);
        assert_eq!(controller.store().raw(KEY), None);
        assert_eq!(controller.target().to_attr(), "");
    }

    #[test]
    fn test_current_value_is_stable() {
        let mut controller = controller(MemoryStore::new());
        controller.initialize(true);
        let first = controller.current_value();
        assert_eq!(controller.current_value(), first);
        assert_eq!(controller.current_value(), first);
    }

    #[test]
    fn test_disabled_storage_degrades_to_session() {
        let mut controller = DarkModeController::new(
            KEY,
            ThemeClasses::default(),
            DisabledStore::default(),
            ClassList::new(),
        );

        assert_eq!(controller.initialize(true), Preference::Dark);
        assert!(!controller.is_persistent());

        assert_eq!(controller.toggle(), Preference::Light);
        assert_eq!(controller.toggle(), Preference::Dark);
        assert!(controller.target().contains("dark"));
        // Session-only mode stops hitting the broken storage.
        assert_eq!(controller.store().save_calls, 0);
    }

    #[test]
    fn test_save_failure_after_successful_load() {
        struct ReadOnlyStore;
        impl PreferenceStore for ReadOnlyStore {
            fn load(&self, _key: &str) -> Result<Option<bool>, StoreError> {
                Ok(Some(false))
            }
            fn save(&mut self, _key: &str, _dark: bool) -> Result<(), StoreError> {
                Err(disabled())
            }
        }

        let mut controller =
            DarkModeController::new(KEY, ThemeClasses::default(), ReadOnlyStore, ClassList::new());
        controller.initialize(true);
        assert!(controller.is_persistent());

        assert_eq!(controller.toggle(), Preference::Dark);
        assert!(!controller.is_persistent());
        assert_eq!(controller.target().to_attr(), "dark");
    }

    #[test]
    fn test_borrowed_target() {
        let mut root = ClassList::new();
        root.add("antialiased");
        {
            let mut controller =
                DarkModeController::new(KEY, ThemeClasses::default(), MemoryStore::new(), &mut root);
            controller.initialize(false);
            controller.toggle();
        }
        assert_eq!(root.to_attr(), "antialiased dark");
    }

    #[test]
    fn test_custom_classes() {
        let classes = ThemeClasses {
            dark: "theme-dark".into(),
            light: "theme-light".into(),
        };
        let mut controller =
            DarkModeController::new("prefers-dark", classes, MemoryStore::new(), ClassList::new());
        controller.initialize(false);
        assert_eq!(controller.target().to_attr(), "theme-light");
        controller.toggle();
        assert_eq!(controller.store().raw("prefers-dark"), Some("true"));
        assert_eq!(controller.target().to_attr(), "theme-dark");
    }

    #[test]
    fn test_file_store_persists_across_controllers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("storage.json");

        let mut controller = DarkModeController::new(
            KEY,
            ThemeClasses::default(),
            FileStore::new(&path),
            ClassList::new(),
        );
        assert_eq!(controller.initialize(true), Preference::Dark);
        assert_eq!(controller.toggle(), Preference::Light);
        assert!(controller.is_persistent());

        let values: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(values.get(KEY).map(String::as_str), Some("false"));

        let mut reloaded = DarkModeController::new(
            KEY,
            ThemeClasses::default(),
            FileStore::new(&path),
            ClassList::new(),
        );
        assert_eq!(reloaded.initialize(true), Preference::Light);
        assert_eq!(reloaded.target().to_attr(), "light");
    }
}
