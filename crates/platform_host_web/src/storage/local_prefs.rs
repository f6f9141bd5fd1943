//! `localStorage`-backed preference store implementation.
//!
//! Values are stored as raw text, so the theme preference lands in `localStorage` as the bare
//! `light` / `dark` token.

use platform_host::{PrefsError, PrefsStore};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
///
/// Off `wasm32` there is no browser storage and every access reports
/// [`PrefsError::Unavailable`].
pub struct WebPrefsStore;

impl WebPrefsStore {
    /// Loads the raw value stored for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the read throws.
    pub fn load_raw(self, key: &str) -> Result<Option<String>, PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| PrefsError::Read {
                    key: key.to_string(),
                    message: format!("localStorage get_item failed: {e:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(PrefsError::Unavailable)
        }
    }

    /// Saves a raw value for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails (quota, privacy mode).
    pub fn save_raw(self, key: &str, raw: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw)
                .map_err(|e| PrefsError::Write {
                    key: key.to_string(),
                    message: format!("localStorage set_item failed: {e:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Err(PrefsError::Unavailable)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, PrefsError> {
    // `window.localStorage` throws when storage is disabled and yields null in some sandboxes.
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PrefsError::Unavailable)
}

impl PrefsStore for WebPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        self.load_raw(key)
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError> {
        self.save_raw(key, raw)
    }
}
