//! Angle helpers shared across the crate.

/// Normalize a longitude in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let n = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if n >= 360.0 { n - 360.0 } else { n }
}

/// Forward arc from `from` to `to`, degrees [0, 360).
pub fn arc_forward(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(370.0) - 10.0).abs() < 1e-12);
        assert!((normalize_360(720.0)).abs() < 1e-12);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(-360.0)).abs() < 1e-12);
    }

    #[test]
    fn normalize_never_reaches_360() {
        for deg in [-1e-13, 359.999_999_999_999, 360.0, -720.0] {
            let n = normalize_360(deg);
            assert!((0.0..360.0).contains(&n), "{deg} -> {n}");
        }
    }

    #[test]
    fn arc_wraps() {
        assert!((arc_forward(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((arc_forward(10.0, 350.0) - 340.0).abs() < 1e-12);
    }
}
