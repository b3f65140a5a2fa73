//! bounded — argmin-powered minimizer for box-constrained objectives.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **minimizing
//! objectives** `c(θ)` whose natural parameters live in a box. Callers
//! implement a single trait, [`Objective`], and invoke [`minimize`] to run
//! L-BFGS with a configurable line search, tolerances, and finite-difference
//! fallbacks.
//!
//! Key behaviors
//! -------------
//! - Expose user-supplied objectives to Argmin via [`adapter::ArgMinAdapter`].
//! - Expose a single, user-facing entrypoint [`minimize`] that:
//!   - validates the initial guess with [`Objective::check`],
//!   - selects an L-BFGS solver via [`builders`] based on [`traits::LineSearcher`],
//!   - executes the solver via [`run::run_lbfgs`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Fall back to robust finite differences in the adapter when analytic
//!   derivatives are missing, with post-hoc validation and error capture.
//! - Centralize optimizer configuration ([`Tolerances`], [`SolverOptions`]) and
//!   validation logic ([`validation`]) so downstream code can assume sane,
//!   finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer itself is **unconstrained**. Box constraints are handled
//!   by the model layer through a bounded reparameterization (see
//!   [`numerical_stability`](crate::optimization::numerical_stability)), so
//!   every `θ` the solver proposes maps to an admissible model parameter.
//! - [`Objective::value`] and [`Objective::grad`] must treat invalid inputs
//!   as recoverable `OptError` values, not panics.
//! - Vectors use the canonical aliases [`Theta`] and [`Grad`]; all are
//!   assumed finite whenever optimization proceeds.
//! - Configuration types ([`Tolerances`], [`SolverOptions`]) are validated on
//!   construction and are treated as internally consistent by the solver
//!   layer.
//!
//! Conventions
//! -----------
//! - Parameters live in an unconstrained optimizer space as [`Theta`]
//!   (`Array1<f64>`). Any mapping from constrained → unconstrained space
//!   happens in the model layer.
//! - The objective is minimized directly; there is no internal sign flip,
//!   and [`OptimOutcome::value`] reports the minimized cost `c(θ̂)`.
//! - Gradients exposed by [`Objective::grad`] are gradients of the objective
//!   itself (`∇c(θ)`).
//! - Errors bubble up as `OptResult<T>` / `OptError`; this module and its
//!   children never intentionally panic or use `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - Model code implements [`Objective`] for its types, then calls
//!   [`minimize`] with:
//!   - a model instance `&M`,
//!   - an initial parameter vector [`Theta`],
//!   - a data payload `&M::Data`, and
//!   - a [`SolverOptions`] configuration (tolerances, line search, L-BFGS
//!     memory).
//! - Higher-level front-ends (Python bindings) are expected to interact only
//!   with the re-exported surface: [`minimize`], [`Objective`],
//!   [`SolverOptions`], [`Tolerances`], [`OptimOutcome`], plus numeric
//!   aliases from [`types`].
//! - Internal optimizer code:
//!   - uses [`adapter`] to bridge into Argmin,
//!   - uses [`builders`] to construct L-BFGS solvers with the chosen
//!     line search,
//!   - delegates execution to [`run::run_lbfgs`], and
//!   - relies on [`validation`] for derivative and state checks.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover:
//!   - cost/gradient pass-through and FD fallback in [`adapter`],
//!   - solver construction and tolerance wiring in [`builders`],
//!   - validation behavior in [`validation`],
//!   - configuration and outcome invariants in [`traits`].
//! - Integration tests exercise [`minimize`] implicitly by fitting a
//!   seasonal smoothing model, verifying that:
//!   - line-search choices are respected,
//!   - finite-difference fallbacks behave as expected, and
//!   - [`OptimOutcome`] reports sensible values and diagnostics.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::traits::{Objective, OptimOutcome, SolverOptions, Tolerances};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use holt_winters::optimization::bounded::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::traits::{Objective, OptimOutcome, SolverOptions, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
