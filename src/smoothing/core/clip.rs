//! core::clip — saturation of reconstructed values.
//!
//! Reconstructed fitted values and forecasts are products of level, trend,
//! and seasonal terms, so they can momentarily overflow or dip below zero
//! even when the state itself is well-behaved. [`saturating_clip`] pins
//! such values to the representable non-negative range `[0, f64::MAX]`
//! instead of letting infinities or negative outputs escape.

/// Clamp a reconstructed value into `[0.0, f64::MAX]`.
///
/// - Negative values become `0.0` (a multiplicative forecast cannot go
///   below zero).
/// - `+inf` saturates to `f64::MAX`.
///
/// The input is assumed non-NaN; the recurrence rejects non-finite state
/// before any reconstruction happens.
pub fn saturating_clip(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else if value > f64::MAX {
        f64::MAX
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Pin the clamp at both ends and pass-through in between.
    //
    // Given
    // -----
    // - A negative value, zero, an ordinary value, f64::MAX, and +inf.
    //
    // Expect
    // ------
    // - 0 for negatives, identity for in-range values, f64::MAX for +inf.
    fn clips_to_non_negative_range() {
        // Act / Assert
        assert_eq!(saturating_clip(-3.5), 0.0);
        assert_eq!(saturating_clip(0.0), 0.0);
        assert_eq!(saturating_clip(42.25), 42.25);
        assert_eq!(saturating_clip(f64::MAX), f64::MAX);
        assert_eq!(saturating_clip(f64::INFINITY), f64::MAX);
    }
}
