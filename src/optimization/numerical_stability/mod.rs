//! numerical_stability — numerically robust transforms for bounded parameters.
//!
//! Purpose
//! -------
//! Collect numerically stable scalar transforms for mapping between the
//! optimizer's unconstrained θ-space and box-constrained smoothing weights.
//! This module centralizes small numeric tolerances and transform logic so
//! the rest of the optimization and smoothing layers can assume
//! well-conditioned `f64` arithmetic.
//!
//! Key behaviors
//! -------------
//! - Provide stable scalar transforms (`safe_logistic`, `safe_logit`) for
//!   mapping unconstrained reals into (0, 1) parameters without
//!   overflow/underflow in either tail.
//! - Provide bounded variants (`bounded_logistic`, `bounded_logit`) that
//!   rescale the pair onto an arbitrary interval `[lo, hi]`, used for the
//!   `[0.01, 0.99]` smoothing-weight box.
//! - Centralize the inward clamp (`LOGIT_EPS`) so boundary-valued starting
//!   points map to finite optimizer coordinates consistently everywhere.
//!
//! Invariants & assumptions
//! ------------------------
//! - All public transforms assume finite `f64` inputs; domain and shape
//!   validation (e.g., weight ranges, vector lengths) is enforced in the
//!   smoothing and optimizer layers, not here.
//! - Bounded variants assume `lo < hi`; no attempt is made to repair a
//!   degenerate or reversed interval.
//!
//! Conventions
//! -----------
//! - This module never logs, performs I/O, or touches global state; it is
//!   pure numerical helpers suitable for use inside tight inner loops.
//! - Panics and `unsafe` are avoided under normal usage; invalid inputs
//!   should be caught by upstream validation and surfaced as
//!   domain-specific error types.
//!
//! Downstream usage
//! ----------------
//! - Parameter containers use these transforms to map optimizer-space θ
//!   into model-space smoothing weights and back (`HwParams::from_theta` /
//!   `to_theta`).
//! - Higher-level front-ends are expected to depend only on the
//!   re-exported surface or the prelude, not on internal implementation
//!   details of [`transformations`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover tail behavior of the
//!   logistic, round-trip consistency of the logistic/logit pair, and
//!   finiteness of boundary logits under the `LOGIT_EPS` clamp.
//! - Integration tests in the smoothing and optimization modules exercise
//!   higher-level invariants (weight bounds across full optimizer runs)
//!   rather than re-testing these low-level numeric primitives.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{
    LOGIT_EPS, bounded_logistic, bounded_logit, safe_logistic, safe_logit,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use holt_winters::optimization::numerical_stability::prelude::*;
//
// to import the main numerical-stability surface in a single line.

pub mod prelude {
    pub use super::transformations::{
        LOGIT_EPS, bounded_logistic, bounded_logit, safe_logistic, safe_logit,
    };
}
