//! Preference storage contracts and lightweight test adapters.

mod prefs;

pub use prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore, UnavailablePrefsStore};
