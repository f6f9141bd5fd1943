//! Reactive light/dark theme preference backed by a [`PrefsStore`].
//!
//! The in-memory signal is the source of truth for toggling; storage is a write-through mirror
//! that is read exactly once, when the store is created. Storage failures never reach the caller:
//! loads fall back to [`ThemePreference::Light`] and failed writes still flip the in-memory value.

use std::rc::Rc;

use leptos::{
    create_rw_signal, logging, provide_context, use_context, ReadSignal, RwSignal,
    SignalGetUntracked, SignalSet,
};
use platform_host::{ParseThemeError, PrefsError, PrefsStore, ThemePreference, THEME_PREFERENCE_KEY};
use thiserror::Error;

#[derive(Debug, Error)]
enum ThemeLoadError {
    #[error(transparent)]
    Storage(#[from] PrefsError),
    #[error(transparent)]
    Malformed(#[from] ParseThemeError),
}

fn load_persisted_theme(prefs: &dyn PrefsStore) -> Result<Option<ThemePreference>, ThemeLoadError> {
    let Some(raw) = prefs.load_pref(THEME_PREFERENCE_KEY)? else {
        return Ok(None);
    };
    Ok(Some(raw.parse()?))
}

/// Resolves the startup theme from persisted storage.
///
/// Returns the stored theme when the `theme-preference` key holds `light` or `dark`, and
/// [`ThemePreference::Light`] otherwise. Never writes.
pub fn initialize_theme(prefs: &dyn PrefsStore) -> ThemePreference {
    match load_persisted_theme(prefs) {
        Ok(Some(theme)) => theme,
        Ok(None) => ThemePreference::default(),
        Err(err) => {
            logging::warn!("theme preference load failed, using default: {err}");
            ThemePreference::default()
        }
    }
}

/// Flips `current` and persists the new theme under the `theme-preference` key.
///
/// Exactly one key is written per call. When the write fails the flipped value is still returned.
pub fn toggle_theme(prefs: &dyn PrefsStore, current: ThemePreference) -> ThemePreference {
    let next = current.toggled();
    if let Err(err) = prefs.save_pref(THEME_PREFERENCE_KEY, next.as_str()) {
        logging::warn!("theme preference persist failed: {err}");
    }
    next
}

#[derive(Clone)]
/// Owned theme state with an injected preference backend.
///
/// Clones share the same signal and backend.
pub struct ThemeStore {
    prefs: Rc<dyn PrefsStore>,
    theme: RwSignal<ThemePreference>,
}

impl ThemeStore {
    /// Creates the store, loading the initial theme from `prefs`.
    ///
    /// Must be called inside a Leptos reactive runtime.
    pub fn new(prefs: Rc<dyn PrefsStore>) -> Self {
        let initial = initialize_theme(prefs.as_ref());
        Self {
            prefs,
            theme: create_rw_signal(initial),
        }
    }

    /// Current theme without subscribing the caller.
    pub fn current(&self) -> ThemePreference {
        self.theme.get_untracked()
    }

    /// Whether the dark theme is active.
    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    /// Read-only signal for views that re-render on theme changes.
    pub fn theme(&self) -> ReadSignal<ThemePreference> {
        self.theme.read_only()
    }

    /// Flips the theme, persists it, and returns the new value.
    pub fn toggle(&self) -> ThemePreference {
        let next = toggle_theme(self.prefs.as_ref(), self.current());
        self.theme.set(next);
        next
    }
}

/// Creates a [`ThemeStore`] and provides it to descendant components through context.
pub fn provide_theme_store(prefs: Rc<dyn PrefsStore>) -> ThemeStore {
    let store = ThemeStore::new(prefs);
    provide_context(store.clone());
    store
}

/// Returns the [`ThemeStore`] provided by an ancestor, if any.
pub fn use_theme_store() -> Option<ThemeStore> {
    use_context::<ThemeStore>()
}
