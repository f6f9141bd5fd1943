//! Pure display formatting for avatars, price tags, progress bars, and meters.
//!
//! Every function here is deterministic and side-effect free.

mod currency;
mod initials;
mod level;

pub use currency::{format_currency_or_passthrough, format_price_with, CurrencyFormat, Price};
pub use initials::{derive_initials, display_initials, MaxInitials, INITIALS_FALLBACK};
pub use level::{
    compute_banded_level, compute_meter_level, compute_progress_level, percent_label, Band,
    BandedLevel, LevelError, MeterThresholds,
};
