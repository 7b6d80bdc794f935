/// Relative tolerance below which a change in distance is treated as rounding.
pub const EPSILON: f64 = 1e-9;

/// Smallest decrease from `current` that counts as an improvement.
fn tolerance(current: f64) -> f64 {
    EPSILON * current.abs().max(1.0)
}

/// The epsilon gate for relaxation: `candidate` replaces `current` only when
/// it is lower by more than the tolerance. Any finite candidate improves an
/// infinite distance.
///
/// Cycles whose weight is zero up to rounding can never pass this gate, so
/// they are not mistaken for negative cycles.
pub fn improves(candidate: f64, current: f64) -> bool {
    if current == f64::INFINITY {
        return candidate < current;
    }
    candidate < current - tolerance(current)
}

/// `value` matches `expected` within the tolerance used by [`improves`].
pub fn approx_eq(value: f64, expected: f64) -> bool {
    if value == expected {
        return true;
    }
    (value - expected).abs() <= tolerance(expected)
}

#[cfg(test)]
mod numeric_tests {
    use super::*;

    #[test]
    fn finite_candidate_improves_infinity() {
        assert!(improves(1e300, f64::INFINITY));
        assert!(!improves(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn rounding_noise_is_not_an_improvement() {
        // 0.3 + 5.6 + 4.4 - 10.3 lands a few ulps away from zero.
        let lap = 0.3 + 5.6 + 4.4 - 10.3;
        assert!(!improves(lap, 0.0));
        assert!(!improves(-5.4 + 4e-16, -5.4));
    }

    #[test]
    fn gate_scales_with_magnitude() {
        assert!(improves(-1.0, 0.0));
        assert!(improves(1e12 - 10_000.0, 1e12));
        assert!(!improves(1e12 - 100.0, 1e12));
    }

    #[test]
    fn approx_eq_accepts_noise_only() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(!approx_eq(0.31, 0.3));
    }
}
