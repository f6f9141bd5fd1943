use platform_host::{MemoryPrefsStore, PrefsError, PrefsStore};

use crate::WebPrefsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters (`localStorage`).
    Browser,
    /// Session-scoped in-memory adapters for headless hosts and server rendering.
    Memory,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "memory-host")]
    {
        HostStrategy::Memory
    }

    #[cfg(not(feature = "memory-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Memory => "memory",
    }
}

/// Adapter enum that erases the concrete preferences backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// Browser-backed preference storage.
    Browser(WebPrefsStore),
    /// In-memory preference storage that lives as long as the adapter.
    Memory(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Memory(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw),
            Self::Memory(store) => store.save_pref(key, raw),
        }
    }
}

/// Builds the preference store for the selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Memory => PrefsStoreAdapter::Memory(MemoryPrefsStore::default()),
    }
}
