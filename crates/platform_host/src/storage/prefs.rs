//! Lightweight preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure reported by a [`PrefsStore`] backend.
pub enum PrefsError {
    /// The host has no usable preference storage (disabled, sandboxed, or not a browser).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backend rejected a read.
    #[error("preference read for `{key}` failed: {message}")]
    Read {
        /// Preference key being read.
        key: String,
        /// Backend-provided failure detail.
        message: String,
    },
    /// The backend rejected a write.
    #[error("preference write for `{key}` failed: {message}")]
    Write {
        /// Preference key being written.
        key: String,
        /// Backend-provided failure detail.
        message: String,
    },
}

/// Host service for lightweight preference values (raw text stored per key).
///
/// Access is synchronous: every call is a single get or set against local storage.
pub trait PrefsStore {
    /// Loads the raw value stored for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unavailable or the read fails.
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Saves a raw value for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unavailable or the write fails.
    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError>;
}

impl<S: PrefsStore + ?Sized> PrefsStore for Rc<S> {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        (**self).load_pref(key)
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError> {
        (**self).save_pref(key, raw)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), PrefsError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Preference store for hosts where storage is disabled; every access fails.
pub struct UnavailablePrefsStore;

impl PrefsStore for UnavailablePrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Err(PrefsError::Unavailable)
    }

    fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), PrefsError> {
        Err(PrefsError::Unavailable)
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, so a test can keep a handle while the store under test
/// owns another.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<Vec<String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with a single key.
    pub fn with_entry(key: impl Into<String>, raw: impl Into<String>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().insert(key.into(), raw.into());
        store
    }

    /// Reads a key without going through the [`PrefsStore`] contract.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Keys written through [`PrefsStore::save_pref`], in call order.
    pub fn write_log(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        self.writes.borrow_mut().push(key.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_prefs_store_round_trip_and_write_log() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_pref("pref.key", "dark").expect("save");
        assert_eq!(
            store_obj.load_pref("pref.key").expect("load"),
            Some("dark".to_string())
        );
        assert_eq!(store_obj.load_pref("missing").expect("load"), None);
        assert_eq!(store.write_log(), vec!["pref.key".to_string()]);
    }

    #[test]
    fn memory_prefs_store_clones_share_entries() {
        let store = MemoryPrefsStore::with_entry("k", "light");
        let handle = store.clone();
        store.save_pref("k", "dark").expect("save");
        assert_eq!(handle.peek("k").as_deref(), Some("dark"));
    }

    #[test]
    fn rc_wrapped_store_delegates() {
        let store = MemoryPrefsStore::default();
        let shared: Rc<dyn PrefsStore> = Rc::new(store.clone());
        shared.save_pref("k", "v").expect("save");
        assert_eq!(store.peek("k").as_deref(), Some("v"));
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
        store_obj.save_pref("k", "light").expect("save");
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
    }

    #[test]
    fn unavailable_prefs_store_fails_every_access() {
        let store = UnavailablePrefsStore;
        assert_eq!(store.load_pref("k"), Err(PrefsError::Unavailable));
        assert_eq!(store.save_pref("k", "dark"), Err(PrefsError::Unavailable));
    }

    #[test]
    fn prefs_error_messages_name_the_key() {
        let err = PrefsError::Write {
            key: "theme-preference".to_string(),
            message: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "preference write for `theme-preference` failed: QuotaExceededError"
        );
    }
}
