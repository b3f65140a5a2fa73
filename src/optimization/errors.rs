use argmin::core::{ArgminError, Error};

use crate::smoothing::errors::{HwError, ParamError};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Objective ----
    /// The objective function failed while being evaluated by the solver.
    ObjectiveFailure {
        text: String,
    },

    // ---- Param Errors ----
    /// Theta length mismatch for the smoothing-weight triple.
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Theta coordinates need to be finite.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },

    /// Smoothing weight outside its admissible interval.
    InvalidWeight {
        name: &'static str,
        value: f64,
    },

    // ---- Gradient ----
    /// Implies that FD should be used
    GradientNotImplemented,

    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- SolverOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Cost change tolerance needs to be positive and finite.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLBFGSMem {
        mem: usize,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Theta hat is missing
    MissingThetaHat,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    /// Catch-all for unexpected failures.
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Objective ----
            OptError::ObjectiveFailure { text } => {
                write!(f, "Objective evaluation failed: {text}")
            }
            // ---- Param Errors ----
            OptError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, got {actual}")
            }
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "Theta coordinate at index {index} must be finite; got: {value}")
            }
            OptError::InvalidWeight { name, value } => {
                write!(f, "Smoothing weight {name} outside its admissible interval: {value}")
            }
            // ---- Gradient ----
            OptError::GradientNotImplemented => {
                write!(f, "No analytic gradient provided; finite differences should be used.")
            }
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, got {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient element at index {index} ({value}): {reason}")
            }
            // ---- SolverOptions ----
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance ({tol}): {reason}")
            }
            OptError::InvalidTolCost { tol, reason } => {
                write!(f, "Invalid cost tolerance ({tol}): {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations ({max_iter}): {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "At least one of tol_grad, tol_cost, or max_iter must be provided.")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            OptError::InvalidLBFGSMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory ({mem}): {reason}")
            }
            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Cost function returned a non-finite value: {value}")
            }
            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid parameter estimate at index {index} ({value}): {reason}")
            }
            OptError::MissingThetaHat => {
                write!(f, "Optimizer did not produce a parameter estimate.")
            }
            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Solver backend error: {text}")
            }
            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<ParamError> for OptError {
    fn from(err: ParamError) -> Self {
        match err {
            ParamError::ThetaLengthMismatch { expected, actual } => {
                OptError::ThetaLengthMismatch { expected, actual }
            }
            ParamError::InvalidThetaInput { index, value } => {
                OptError::InvalidThetaInput { index, value }
            }
            ParamError::InvalidWeight { name, value } => OptError::InvalidWeight { name, value },
        }
    }
}

impl From<HwError> for OptError {
    fn from(err: HwError) -> Self {
        OptError::ObjectiveFailure { text: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Conversions from `ParamError` and `HwError` into `OptError`.
    //
    // They intentionally DO NOT cover:
    // - Conversions from live `argmin::core::Error` values (exercised
    //   indirectly by optimizer integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure `ParamError` variants map onto their dedicated `OptError`
    // counterparts rather than collapsing into the fallback.
    //
    // Given
    // -----
    // - One instance of each `ParamError` variant.
    //
    // Expect
    // ------
    // - Field-preserving conversions for all three variants.
    fn param_errors_convert_to_dedicated_variants() {
        // Act / Assert
        assert_eq!(
            OptError::from(ParamError::ThetaLengthMismatch { expected: 3, actual: 2 }),
            OptError::ThetaLengthMismatch { expected: 3, actual: 2 }
        );
        assert_eq!(
            OptError::from(ParamError::InvalidThetaInput { index: 1, value: f64::INFINITY }),
            OptError::InvalidThetaInput { index: 1, value: f64::INFINITY }
        );
        assert_eq!(
            OptError::from(ParamError::InvalidWeight { name: "alpha", value: 1.5 }),
            OptError::InvalidWeight { name: "alpha", value: 1.5 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure model-layer errors raised inside the objective surface as
    // `ObjectiveFailure` with the original message preserved.
    //
    // Given
    // -----
    // - An `HwError::NonFiniteState` as produced by the recurrence.
    //
    // Expect
    // ------
    // - `OptError::ObjectiveFailure` whose text contains the inner message.
    fn model_errors_wrap_into_objective_failure() {
        // Arrange
        let inner = HwError::NonFiniteState { component: "level", step: 4, value: f64::NAN };
        let inner_msg = inner.to_string();

        // Act
        let converted = OptError::from(inner);

        // Assert
        match converted {
            OptError::ObjectiveFailure { text } => assert_eq!(text, inner_msg),
            other => panic!("expected ObjectiveFailure, got {other:?}"),
        }
    }
}
