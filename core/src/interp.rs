// Blending helpers shared by the lattice kernels.

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

// Cubic through four evenly spaced samples, passing through `b` at t = 0
// and `c` at t = 1. Overshoots by at most a factor of 1.5.
#[inline]
pub fn cubic_lerp(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let p = (d - c) - (a - b);
    t * t * t * p + t * t * ((a - b) - p) + t * (c - a) + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(-2.0, 4.0, 0.0), -2.0);
        assert_eq!(lerp(-2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(-2.0, 4.0, 0.5), 1.0);
    }

    #[test]
    fn cubic_lerp_passes_through_inner_samples() {
        assert_eq!(cubic_lerp(0.3, -0.4, 0.9, 0.1, 0.0), -0.4);
        assert!((cubic_lerp(0.3, -0.4, 0.9, 0.1, 1.0) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn cubic_lerp_overshoot_is_bounded() {
        // worst case alternating samples at the midpoint
        let v = cubic_lerp(-1.0, 1.0, 1.0, -1.0, 0.5);
        assert!((v - 1.5).abs() < 1e-12);
    }
}
