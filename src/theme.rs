use crate::storage::PreferenceStore;
use crate::types::ThemeMode;
use std::sync::Arc;

pub const THEME_KEY: &str = "theme";

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_label: &'static str,
    pub toggle_icon: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_label: "Switch to dark mode",
            toggle_icon: "☾",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_label: "Switch to light mode",
            toggle_icon: "☀",
        },
    }
}

/// Saved preference first, then the environment's color scheme, then light.
pub fn resolve_initial(saved: Option<&str>, prefers_dark: bool) -> ThemeMode {
    match saved.map(str::parse::<ThemeMode>) {
        Some(Ok(mode)) => mode,
        _ if prefers_dark => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

/// The page-wide theme. One writer (the header toggle), many readers.
#[derive(Clone)]
pub struct ThemeStore {
    mode: ThemeMode,
    storage: Arc<dyn PreferenceStore>,
}

impl ThemeStore {
    pub fn load(storage: Arc<dyn PreferenceStore>, prefers_dark: bool) -> Self {
        let saved = storage.get(THEME_KEY);
        let mode = resolve_initial(saved.as_deref(), prefers_dark);
        let store = Self { mode, storage };
        store.persist();
        store
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        tracing::debug!(theme = %mode, "theme changed");
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.storage.set(THEME_KEY, self.mode.as_str()) {
            tracing::warn!("failed to persist theme preference: {err:#}");
        }
    }
}

/// The host's reported color-scheme preference.
#[cfg(target_arch = "wasm32")]
pub fn prefers_dark(_configured: Option<ThemeMode>) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark(configured: Option<ThemeMode>) -> bool {
    configured.is_some_and(ThemeMode::is_dark)
}

const LIGHT_THEME: &str = r#"
:root {
    --color-primary: #4f46e5;
    --color-primary-hover: #4338ca;
    --color-secondary: #14b8a6;
    --color-accent: #f59e0b;
    --color-hero-from: #eef2ff;
    --color-hero-to: #eff6ff;
    --color-bg: #ffffff;
    --color-text-primary: #111827;
    --color-text-secondary: #4b5563;
    --color-card: #ffffff;
    --color-section-alt: #f9fafb;
    --color-footer: #f3f4f6;
    --color-modal-bg: #ffffff;
    --color-modal-text: #1f2937;
    --color-border: #e5e7eb;
}
"#;

const DARK_THEME: &str = r#"
:root {
    --color-primary: #4f46e5;
    --color-primary-hover: #4338ca;
    --color-secondary: #0d9488;
    --color-accent: #f59e0b;
    --color-hero-from: #1f2937;
    --color-hero-to: #1e1b4b;
    --color-bg: #111827;
    --color-text-primary: #f3f4f6;
    --color-text-secondary: #d1d5db;
    --color-card: #1f2937;
    --color-section-alt: #18202f;
    --color-footer: #18202f;
    --color-modal-bg: #1f2937;
    --color-modal-text: #f3f4f6;
    --color-border: #374151;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn saved_preference_wins_over_environment() {
        assert_eq!(resolve_initial(Some("light"), true), ThemeMode::Light);
        assert_eq!(resolve_initial(Some("dark"), false), ThemeMode::Dark);
    }

    #[test]
    fn environment_decides_without_valid_preference() {
        assert_eq!(resolve_initial(None, true), ThemeMode::Dark);
        assert_eq!(resolve_initial(Some("octane"), true), ThemeMode::Dark);
        assert_eq!(resolve_initial(None, false), ThemeMode::Light);
    }

    #[test]
    fn definitions_label_the_opposite_mode() {
        assert_eq!(
            theme_definition(ThemeMode::Dark).toggle_label,
            "Switch to light mode"
        );
        assert!(theme_definition(ThemeMode::Light).css.contains("--color-bg: #ffffff"));
    }

    #[test]
    fn load_writes_resolved_mode() {
        let storage = Arc::new(MemoryStore::new());
        let store = ThemeStore::load(storage.clone(), true);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
