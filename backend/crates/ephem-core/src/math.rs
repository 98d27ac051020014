//! Angle helpers.

/// Reduce an angle into `[0, 360)`.
#[inline]
pub fn normalize_deg(x: f64) -> f64 {
    let y = x.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if y >= 360.0 {
        0.0
    } else {
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_wraps_negative_and_large() {
        assert_abs_diff_eq!(normalize_deg(-30.0), 330.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_deg(725.0), 5.0, epsilon = 1e-12);
        assert_eq!(normalize_deg(360.0), 0.0);
    }

    #[test]
    fn normalize_never_returns_full_turn() {
        assert!(normalize_deg(-1e-15) < 360.0);
    }
}
