//! Typed host-domain contracts shared by the UI core and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the synchronous
//! preference storage contract with its in-memory and fallback adapters, and the persisted theme
//! preference model. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;
pub mod theme;

pub use storage::{MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore, UnavailablePrefsStore};
pub use theme::{ParseThemeError, ThemePreference, THEME_PREFERENCE_KEY};
