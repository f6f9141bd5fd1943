//! Shared UI core for theme state and display formatting.
//!
//! The crate owns the reactive theme preference store consumed by views and the pure formatters
//! behind avatar initials, price tags, and progress/meter fills. Persistence is injected through
//! [`platform_host::PrefsStore`]; browser storage lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod format;
mod theme;

pub use format::{
    compute_banded_level, compute_meter_level, compute_progress_level, derive_initials,
    display_initials, format_currency_or_passthrough, format_price_with, percent_label, Band,
    BandedLevel, CurrencyFormat, LevelError, MaxInitials, MeterThresholds, Price,
    INITIALS_FALLBACK,
};
pub use platform_host::ThemePreference;
pub use theme::{
    initialize_theme, provide_theme_store, toggle_theme, use_theme_store, ThemeStore,
};

/// Convenience imports for crates consuming the theme store and formatters.
pub mod prelude {
    pub use crate::{
        compute_banded_level, compute_meter_level, compute_progress_level, derive_initials,
        display_initials, format_currency_or_passthrough, percent_label, provide_theme_store,
        use_theme_store, Band, BandedLevel, MaxInitials, MeterThresholds, ThemePreference,
        ThemeStore,
    };
}
