use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic color band for progress and meter fills.
pub enum Band {
    /// Value is in the preferred region.
    Success,
    /// Value is acceptable but not preferred.
    Warning,
    /// Value is in the worst region.
    Error,
    /// No thresholds were supplied.
    NeutralPrimary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Fill percentage and color band computed for a progress bar or meter.
pub struct BandedLevel {
    /// Fill percentage clamped to `0..=100`.
    pub percentage: f64,
    /// Semantic band.
    pub band: Band,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
/// Invalid input to level computation.
pub enum LevelError {
    /// `min` and `max` are equal, so no percentage exists.
    #[error("level range is empty: min {min} equals max {max}")]
    EmptyRange {
        /// Range start.
        min: f64,
        /// Range end.
        max: f64,
    },
    /// An input was NaN or infinite.
    #[error("level input `{field}` is not a finite number")]
    NonFinite {
        /// Name of the offending input.
        field: &'static str,
    },
    /// `max - min` overflows to infinity.
    #[error("level range {min}..{max} is too wide to represent")]
    RangeOverflow {
        /// Range start.
        min: f64,
        /// Range end.
        max: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Meter thresholds, in the same units as the value.
pub struct MeterThresholds {
    /// Upper edge of the low region.
    pub low: f64,
    /// Lower edge of the high region.
    pub high: f64,
    /// Preferred value; selects which region counts as good.
    pub optimum: f64,
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), LevelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LevelError::NonFinite { field })
    }
}

/// Computes the fill percentage and band of a meter over `min..max`.
///
/// Banding needs all of `low`, `high` and `optimum`; with any of them missing the band is
/// [`Band::NeutralPrimary`]. When the optimum lies strictly between `low` and `high` the result
/// is never [`Band::Error`]: values outside the sweet spot only reach [`Band::Warning`].
///
/// # Errors
///
/// Returns [`LevelError::EmptyRange`] when `max == min`, [`LevelError::NonFinite`] when any
/// supplied input is NaN or infinite, and [`LevelError::RangeOverflow`] when `max - min` is not
/// representable.
pub fn compute_banded_level(
    value: f64,
    min: f64,
    max: f64,
    low: Option<f64>,
    high: Option<f64>,
    optimum: Option<f64>,
) -> Result<BandedLevel, LevelError> {
    ensure_finite("value", value)?;
    ensure_finite("min", min)?;
    ensure_finite("max", max)?;
    for (field, threshold) in [("low", low), ("high", high), ("optimum", optimum)] {
        if let Some(threshold) = threshold {
            ensure_finite(field, threshold)?;
        }
    }
    if max == min {
        return Err(LevelError::EmptyRange { min, max });
    }

    let range = max - min;
    if !range.is_finite() {
        return Err(LevelError::RangeOverflow { min, max });
    }
    let normalize = |x: f64| (x - min) / range;
    let percentage = (normalize(value) * 100.0).clamp(0.0, 100.0);

    let band = match (low, high, optimum) {
        (Some(low), Some(high), Some(optimum)) => band_for(
            normalize(value),
            normalize(low),
            normalize(high),
            normalize(optimum),
        ),
        _ => Band::NeutralPrimary,
    };

    Ok(BandedLevel { percentage, band })
}

fn band_for(value: f64, low: f64, high: f64, optimum: f64) -> Band {
    if optimum <= low {
        if value <= low {
            Band::Success
        } else if value <= high {
            Band::Warning
        } else {
            Band::Error
        }
    } else if optimum >= high {
        if value >= high {
            Band::Success
        } else if value >= low {
            Band::Warning
        } else {
            Band::Error
        }
    } else if (low..=high).contains(&value) {
        Band::Success
    } else {
        Band::Warning
    }
}

/// [`compute_banded_level`] with thresholds grouped.
///
/// # Errors
///
/// Same as [`compute_banded_level`].
pub fn compute_meter_level(
    value: f64,
    min: f64,
    max: f64,
    thresholds: Option<MeterThresholds>,
) -> Result<BandedLevel, LevelError> {
    match thresholds {
        Some(MeterThresholds { low, high, optimum }) => {
            compute_banded_level(value, min, max, Some(low), Some(high), Some(optimum))
        }
        None => compute_banded_level(value, min, max, None, None, None),
    }
}

/// Computes a plain progress bar level over `0..max`; always [`Band::NeutralPrimary`].
///
/// # Errors
///
/// Returns [`LevelError::EmptyRange`] when `max` is zero and [`LevelError::NonFinite`] for NaN or
/// infinite input.
pub fn compute_progress_level(value: f64, max: f64) -> Result<BandedLevel, LevelError> {
    compute_banded_level(value, 0.0, max, None, None, None)
}

/// Whole-percent label for a fill percentage, e.g. `"65%"`. Halves round up.
pub fn percent_label(percentage: f64) -> String {
    format!("{:.0}%", percentage.round())
}
