//! Numerical stability utilities.
//!
//! Provides safe implementations of common nonlinear transforms
//! that are prone to overflow/underflow in naïve form.
//! The functions here follow guarded strategies similar to those
//! in major ML libraries (e.g. PyTorch, TensorFlow), using explicit
//! guards to keep `f64` arithmetic in a well-conditioned regime.
//!
//! # Provided items
//! - [`LOGIT_EPS`]: a small ε buffer (default 1e-6).
//!   Used to pull boundary values strictly inside an open interval
//!   before applying a logit, so the inverse transform never sees 0 or 1.
//! - [`safe_logistic(x)`]: stable standard logistic, mapping ℝ → (0, 1)
//!   without overflow in either tail.
//! - [`safe_logit(p)`]: inverse of the logistic on (0, 1), with inputs
//!   clamped into `[LOGIT_EPS, 1 − LOGIT_EPS]`.
//! - [`bounded_logistic`] / [`bounded_logit`]: the same pair rescaled onto
//!   an arbitrary interval `[lo, hi]`.
//!
//! # Rationale
//! These transforms are the bridge between the optimizer's unconstrained
//! θ-space and box-constrained model parameters: the solver iterates freely
//! over ℝ while every mapped smoothing weight stays inside its admissible
//! interval, so no candidate ever violates the bounds. In f64 the logistic
//! tails saturate, so extreme θ lands exactly on an interval endpoint;
//! the endpoints are admissible, only the inverse direction needs the
//! ε guard.

/// Inward clamp applied before taking logits.
///
/// A smoothing weight sitting exactly on its interval boundary has an
/// infinite logit. Clamping the normalized value into
/// `[LOGIT_EPS, 1 − LOGIT_EPS]` keeps the unconstrained representation
/// finite while moving the weight by at most `LOGIT_EPS` of the interval
/// width.
pub const LOGIT_EPS: f64 = 1e-6;

/// Numerically stable logistic: `σ(x) = 1 / (1 + exp(−x))`.
///
/// Evaluates the logistic without overflow for large `|x|` by branching on
/// the sign of `x` so that `exp` is only ever called on a non-positive
/// argument:
///
/// - For `x >= 0`, uses `1 / (1 + exp(−x))`.
/// - For `x < 0`, uses `exp(x) / (1 + exp(x))`.
///
/// Both branches agree analytically; the split avoids `exp` of a large
/// positive argument, which would overflow to `inf` and poison the result.
///
/// # Parameters
/// - `x`: real input
///
/// # Returns
/// - `σ(x)` in `(0, 1)` as `f64`.
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Stable inverse of the logistic on `(0, 1)`: solves for `t` in
/// `σ(t) = p`, returning `t = ln(p / (1 − p))`.
///
/// The input is clamped into `[LOGIT_EPS, 1 − LOGIT_EPS]` first, so values
/// on (or numerically at) the boundary produce a large-but-finite logit
/// instead of `±inf`. This mirrors the guarded strategy of
/// [`safe_logistic`]: the round trip `safe_logistic(safe_logit(p))`
/// reproduces `p` up to the clamp.
///
/// # Parameters
/// - `p`: a probability-like value; finite, intended to lie in `(0, 1)`.
///
/// # Returns
/// - `t` such that `σ(t) = clamp(p)`.
pub fn safe_logit(p: f64) -> f64 {
    let p = p.clamp(LOGIT_EPS, 1.0 - LOGIT_EPS);
    (p / (1.0 - p)).ln()
}

/// Logistic rescaled onto the interval `[lo, hi]`.
///
/// Maps ℝ → `[lo, hi]` via `lo + (hi − lo) · σ(x)`. Used to turn an
/// unconstrained optimizer coordinate into a smoothing weight that is
/// guaranteed to respect its box constraint for every iterate.
///
/// The caller is responsible for `lo < hi`. Mathematically the image is
/// the open interval, but in f64 the tails saturate: once `σ(x)` rounds
/// to 0.0 or 1.0 (|x| ≳ 37) the result lands exactly on `lo` or `hi`.
/// Both endpoints are admissible weights, so no inward clamp is applied
/// here.
pub fn bounded_logistic(x: f64, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * safe_logistic(x)
}

/// Inverse of [`bounded_logistic`] on `(lo, hi)`.
///
/// Normalizes `y` into unit space and applies [`safe_logit`], so inputs on
/// the interval boundary are pulled inward by `LOGIT_EPS` of the interval
/// width rather than mapping to `±inf`. This is what makes a starting
/// point sitting exactly on a bound usable as an optimizer seed.
pub fn bounded_logit(y: f64, lo: f64, hi: f64) -> f64 {
    safe_logit((y - lo) / (hi - lo))
}
