//! Integration tests for the theme store and preference storage

use softsell::storage::{FileStore, MemoryStore, PreferenceStore};
use softsell::theme::{THEME_KEY, ThemeStore};
use softsell::types::ThemeMode;
use std::path::PathBuf;
use std::sync::Arc;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("softsell-test-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

mod store_tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_mode() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = ThemeStore::load(storage.clone(), false);
        let original = store.mode();

        store.toggle();
        assert_ne!(store.mode(), original);
        store.toggle();
        assert_eq!(store.mode(), original);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some(original.as_str()));
    }

    #[test]
    fn test_persisted_value_tracks_last_toggle() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = ThemeStore::load(storage.clone(), false);

        for _ in 0..5 {
            let mode = store.toggle();
            assert_eq!(storage.get(THEME_KEY).as_deref(), Some(mode.as_str()));
        }
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_saved_preference_survives_reload() {
        let storage = Arc::new(MemoryStore::with_entry(THEME_KEY, "dark"));
        let store = ThemeStore::load(storage.clone(), false);
        assert_eq!(store.mode(), ThemeMode::Dark);

        let mut store = ThemeStore::load(storage.clone(), true);
        store.set(ThemeMode::Light);
        let reloaded = ThemeStore::load(storage, true);
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_defaults_without_preference() {
        let light = ThemeStore::load(Arc::new(MemoryStore::new()), false);
        let dark = ThemeStore::load(Arc::new(MemoryStore::new()), true);
        assert_eq!(light.mode(), ThemeMode::Light);
        assert_eq!(dark.mode(), ThemeMode::Dark);
    }
}

mod storage_failure_tests {
    use super::*;

    /// Reads a fixed value and refuses every write.
    struct ReadOnlyStore {
        saved: Option<&'static str>,
    }

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            self.saved.map(str::to_string)
        }

        fn set(&self, key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("storage is read-only: {key}"))
        }
    }

    #[test]
    fn test_load_resolves_despite_write_failure() {
        let store = ThemeStore::load(Arc::new(ReadOnlyStore { saved: None }), true);
        assert_eq!(store.mode(), ThemeMode::Dark);

        let store = ThemeStore::load(Arc::new(ReadOnlyStore { saved: Some("light") }), true);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_works_in_memory_when_writes_fail() {
        let mut store = ThemeStore::load(Arc::new(ReadOnlyStore { saved: None }), false);
        let original = store.mode();

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.toggle(), original);
        assert_eq!(store.mode(), original);

        store.set(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }
}

mod file_store_tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = scratch_dir("roundtrip");
        let store = FileStore::new(&dir);

        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "dark").expect("Failed to set");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_theme_store_over_files() {
        let dir = scratch_dir("theme");
        let mut store = ThemeStore::load(Arc::new(FileStore::new(&dir)), false);
        store.toggle();

        let reloaded = ThemeStore::load(Arc::new(FileStore::new(&dir)), false);
        assert_eq!(reloaded.mode(), ThemeMode::Dark);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
