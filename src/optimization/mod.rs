//! optimization — solver stack, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting, combining an
//! Argmin-backed objective minimizer, numerically stable parameter
//! transforms, and a single error/result surface. Callers implement an
//! objective, choose tolerances, and obtain fitted parameters and
//! diagnostics without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing objectives** `c(θ)`
//!   (`bounded`), including configuration of solvers and stopping
//!   criteria.
//! - Supply shared numerical primitives (`numerical_stability`) for mapping
//!   unconstrained parameters into a bounded model space and back.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Solvers operate in an unconstrained parameter space `θ` and assume
//!   that inputs are finite once validation has passed; invalid states are
//!   reported as `OptError`, not panics.
//! - Objective implementations are expected to treat domain violations
//!   (e.g., degenerate seasonal data, out-of-range smoothing weights) as
//!   recoverable errors surfaced through the optimization layer.
//! - Weight-interval and dimension checks for model parameters are enforced
//!   via shared validation and error conversions, so downstream code can
//!   assume that accepted parameters satisfy basic domain constraints.
//!
//! Conventions
//! -----------
//! - All solvers minimize the objective `c(θ)` directly; outcomes report
//!   the minimized cost without sign games.
//! - Parameters and gradients are represented using `ndarray`-based aliases
//!   (`Theta`, `Grad`); any mapping between unconstrained θ-space and
//!   structured model parameters (e.g., the smoothing triple `(α, β, γ)`)
//!   is handled by numerical-stability helpers.
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see raw Argmin errors or model-specific error enums.
//! - This module and its submodules avoid I/O and logging; higher layers
//!   (Python bindings, notebooks) are responsible for reporting progress
//!   and diagnostics, aside from the optional `obs_slog` observer.
//!
//! Downstream usage
//! ----------------
//! - Model code implements `Objective` for its types and calls `minimize`
//!   with a parameter guess, data payload, and `SolverOptions` to obtain an
//!   `OptimOutcome` (via `bounded`).
//! - Smoothing code uses `numerical_stability` for the bounded logistic /
//!   logit pair when mapping smoothing weights into solver space.
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`, which forwards the submodule preludes and
//!   the core error types, or they depend directly on `bounded::prelude` /
//!   `numerical_stability::prelude` when they want a more fine-grained
//!   split.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns:
//!   - `bounded`: solver wiring, tolerance handling, and basic minimization
//!     behavior on toy objectives.
//!   - `numerical_stability`: agreement with naïve formulas on safe grids,
//!     well-behaved tails, and round-trip consistency checks.
//!   - `errors`: conversions from backend/model errors into `OptError` and
//!     basic invariants of the error surface.
//! - Higher-level integration tests exercise end-to-end fitting workflows,
//!   verifying that configuration mistakes, numerical problems, and backend
//!   failures all surface as sensible `OptError` values and that successful
//!   runs produce stable `OptimOutcome`s.

pub mod bounded;
pub mod errors;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use holt_winters::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::bounded::prelude::*;
    pub use super::errors::{OptError, OptResult};
    pub use super::numerical_stability::prelude::*;
}
