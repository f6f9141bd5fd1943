use std::rc::Rc;

use platform_host::{PrefsStore, ThemePreference, THEME_PREFERENCE_KEY};
use platform_host_web::{prefs_store, selected_host_strategy, HostStrategy, PrefsStoreAdapter};
use system_ui::{initialize_theme, ThemeStore};

#[test]
fn memory_host_strategy_backs_the_theme_store() {
    let _ = leptos::create_runtime();
    assert_eq!(selected_host_strategy(), HostStrategy::Memory);

    let prefs = prefs_store();
    assert!(matches!(prefs, PrefsStoreAdapter::Memory(_)));

    let store = ThemeStore::new(Rc::new(prefs.clone()));
    assert_eq!(store.current(), ThemePreference::Light);
    assert_eq!(store.toggle(), ThemePreference::Dark);

    // Adapter clones share the session map, so a fresh mount sees the persisted choice.
    assert_eq!(
        prefs.load_pref(THEME_PREFERENCE_KEY).expect("load"),
        Some("dark".to_string())
    );
    assert_eq!(initialize_theme(&prefs), ThemePreference::Dark);
    let remounted = ThemeStore::new(Rc::new(prefs));
    assert_eq!(remounted.current(), ThemePreference::Dark);
}

#[test]
fn separate_memory_hosts_do_not_share_preferences() {
    let first = prefs_store();
    let second = prefs_store();
    first
        .save_pref(THEME_PREFERENCE_KEY, "dark")
        .expect("save");
    assert_eq!(initialize_theme(&second), ThemePreference::Light);
}
