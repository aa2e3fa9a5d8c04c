use std::collections::HashMap;

/// Storage key for the persisted preference
pub const THEME_STORAGE_KEY: &str = "prefersDark";
/// Class placed on the document root while the dark theme is active
pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Pick the starting theme from the stored flag, falling back to the
    /// system preference only when nothing was ever stored.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored {
            Some("1") => Theme::Dark,
            Some(_) => Theme::Light,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn storage_value(&self) -> &'static str {
        if self.is_dark() {
            "1"
        } else {
            "0"
        }
    }

    /// Text of the toggle button, which names the theme it switches to
    pub fn button_label(&self) -> &'static str {
        if self.is_dark() {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}

/// The single key/value flag store the site persists to
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Dark mode switch. Every applied theme is written back to the store.
pub struct ThemeToggle<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    pub fn new(store: S, system_prefers_dark: bool) -> Self {
        let stored = store.get(THEME_STORAGE_KEY);
        let theme = Theme::resolve(stored.as_deref(), system_prefers_dark);
        let mut toggle = Self { store, theme };
        toggle.apply(theme);
        toggle
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.apply(self.theme.toggled());
        self.theme
    }

    pub fn apply(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(THEME_STORAGE_KEY, theme.storage_value());
        tracing::debug!(dark = theme.is_dark(), "theme applied");
    }

    /// Root element class for the current theme, if any
    pub fn root_class(&self) -> Option<&'static str> {
        self.theme.is_dark().then_some(DARK_THEME_CLASS)
    }

    pub fn button_label(&self) -> &'static str {
        self.theme.button_label()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
