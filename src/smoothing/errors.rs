//! Errors for Holt–Winters smoothing (data validation, options checks,
//! recurrence invariants, and optimizer failures).
//!
//! This module defines a model error type, [`HwError`], and a parameter error
//! type, [`ParamError`], used across the Python-facing API and the internal Rust
//! core. Both implement `Display`/`Error` and convert to `PyErr` for PyO3 when
//! the `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Observations must be **finite and non-negative**; a multiplicative model
//!   has no meaning on negative data.
//! - The series must cover at least **two full seasonal cycles** so that the
//!   initial trend can be estimated from cycle averages.
//! - Optimizer/backend errors are normalized to
//!   [`HwError::OptimizationFailed`] with a human-readable status.
use crate::optimization::errors::OptError;
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for smoothing operations that may produce [`HwError`].
pub type HwResult<T> = Result<T, HwError>;

/// Result alias for parameter-construction/validation paths that may produce
/// [`ParamError`].
pub type ParamResult<T> = Result<T, ParamError>;

/// Unified error type for Holt–Winters modeling.
///
/// Covers input/data validation, options checks, recurrence/structural
/// invariants, and estimation/optimizer failures. Implements
/// `Display`/`Error` and converts to a Python `ValueError` at PyO3
/// boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum HwError {
    // ---- Input/data validation ----
    /// Series is empty.
    EmptySeries,

    /// Seasonal period must be at least 1.
    InvalidPeriod { period: usize },

    /// A data point is NaN/±inf.
    NonFiniteData { index: usize, value: f64 },

    /// A data point is < 0 (multiplicative decomposition needs non-negative data).
    NegativeData { index: usize, value: f64 },

    /// Series must span at least two full seasonal cycles.
    SeriesTooShort { len: usize, period: usize },

    /// Forecast horizon must be at least 1.
    InvalidHorizon { horizon: usize },

    /// A seasonal cycle averaged to zero, so seasonal indices are undefined.
    DegenerateCycle { mean: f64 },

    // ---- Model/recurrence invariants ----
    /// Recurrence produced a non-finite state component.
    NonFiniteState { component: &'static str, step: usize, value: f64 },

    // ---- Estimation / optimizer ----
    /// Optimizer failed; include a human-readable status/reason.
    OptimizationFailed { status: String },

    /// Model hasn't been fitted yet.
    ModelNotFitted,

    // ---- ParamError ----
    /// Smoothing weight outside its admissible interval.
    InvalidWeight { name: &'static str, value: f64 },

    /// Theta length mismatch for the smoothing-weight triple.
    ThetaLengthMismatch { expected: usize, actual: usize },

    /// Unconstrained optimization input must have finite values.
    InvalidThetaInput { index: usize, value: f64 },

    // ---- Fallback ----
    /// Catch-all for unexpected failures.
    UnknownError,
}

impl std::error::Error for HwError {}

impl std::fmt::Display for HwError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            HwError::EmptySeries => {
                write!(f, "Input series is empty.")
            }
            HwError::InvalidPeriod { period } => {
                write!(f, "Seasonal period must be at least 1; got: {period}")
            }
            HwError::NonFiniteData { index, value } => {
                write!(f, "Data point at index {index} is non-finite: {value}")
            }
            HwError::NegativeData { index, value } => {
                write!(f, "Data point at index {index} is negative: {value}")
            }
            HwError::SeriesTooShort { len, period } => {
                write!(
                    f,
                    "Series length ({len}) must cover at least two seasonal cycles ({} points for period {period}).",
                    2 * period
                )
            }
            HwError::InvalidHorizon { horizon } => {
                write!(f, "Forecast horizon must be at least 1; got: {horizon}")
            }
            HwError::DegenerateCycle { mean } => {
                write!(f, "First seasonal cycle averages to {mean}; seasonal indices are undefined.")
            }
            // ---- Model/recurrence invariants ----
            HwError::NonFiniteState { component, step, value } => {
                write!(f, "Recurrence produced non-finite {component} at step {step}: {value}")
            }
            // ---- Estimation / optimizer ----
            HwError::OptimizationFailed { status } => {
                write!(f, "Optimizer failed with status: {status}")
            }
            HwError::ModelNotFitted => {
                write!(f, "Model hasn't been fitted yet.")
            }
            // ---- ParamError ----
            HwError::InvalidWeight { name, value } => {
                write!(f, "Smoothing weight {name} outside its admissible interval: {value}")
            }
            HwError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, got {actual}")
            }
            HwError::InvalidThetaInput { index, value } => {
                write!(f, "Theta input at index {index} must be finite, got {value}")
            }
            HwError::UnknownError => {
                write!(f, "An unknown error occurred in the smoothing model.")
            }
        }
    }
}

/// Convert an [`HwError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<HwError> for PyErr {
    fn from(err: HwError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<OptError> for HwError {
    fn from(err: OptError) -> HwError {
        match err {
            OptError::ThetaLengthMismatch { expected, actual } => {
                HwError::ThetaLengthMismatch { expected, actual }
            }
            OptError::InvalidThetaInput { index, value } => {
                HwError::InvalidThetaInput { index, value }
            }
            OptError::InvalidWeight { name, value } => HwError::InvalidWeight { name, value },
            other => HwError::OptimizationFailed { status: other.to_string() },
        }
    }
}

/// Errors specific to parameter construction and validation.
///
/// Typical causes include out-of-range smoothing weights, length mismatches
/// for the optimizer vector, and non-finite coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Smoothing weight outside its admissible interval.
    InvalidWeight { name: &'static str, value: f64 },

    /// Theta length mismatch for the smoothing-weight triple.
    ThetaLengthMismatch { expected: usize, actual: usize },

    /// Unconstrained optimization input must have finite values.
    InvalidThetaInput { index: usize, value: f64 },
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::InvalidWeight { name, value } => {
                write!(f, "Smoothing weight {name} outside its admissible interval: {value}")
            }
            ParamError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, got {actual}")
            }
            ParamError::InvalidThetaInput { index, value } => {
                write!(f, "Theta input at index {index} must be finite, got {value}")
            }
        }
    }
}

/// Convert a [`ParamError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<ParamError> for PyErr {
    fn from(err: ParamError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<ParamError> for HwError {
    fn from(err: ParamError) -> HwError {
        match err {
            ParamError::InvalidWeight { name, value } => HwError::InvalidWeight { name, value },
            ParamError::ThetaLengthMismatch { expected, actual } => {
                HwError::ThetaLengthMismatch { expected, actual }
            }
            ParamError::InvalidThetaInput { index, value } => {
                HwError::InvalidThetaInput { index, value }
            }
        }
    }
}
