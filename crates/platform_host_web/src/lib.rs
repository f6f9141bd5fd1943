//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete host wiring layer for preference storage: a `localStorage`-backed
//! [`WebPrefsStore`] plus compile-time host-strategy selection through [`prefs_store`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;

pub use adapters::{
    host_strategy_name, prefs_store, selected_host_strategy, HostStrategy, PrefsStoreAdapter,
};
pub use storage::local_prefs::WebPrefsStore;
