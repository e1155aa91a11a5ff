//! Easing for the spin trajectory

/// Cubic ease-out: fast start, velocity approaching zero at the end.
pub fn ease_out_cubic(p: f64) -> f64 {
    let q = 1.0 - p.clamp(0.0, 1.0);
    1.0 - q * q * q
}

/// Angle of an eased spin at frame `frame` of `frame_count` equally spaced
/// samples of normalized progress, ending exactly at `total_spin`.
pub fn angle_at(total_spin: f64, frame: usize, frame_count: usize) -> f64 {
    debug_assert!(frame_count >= 2);
    let p = frame.min(frame_count - 1) as f64 / (frame_count - 1) as f64;
    total_spin * ease_out_cubic(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(angle_at(2160.0, 0, 160), 0.0);
        assert_eq!(angle_at(2160.0, 159, 160), 2160.0);
    }

    #[test]
    fn test_monotone_non_decreasing() {
        let mut prev = 0.0;
        for frame in 0..160 {
            let a = angle_at(1800.0, frame, 160);
            assert!(a >= prev, "angle regressed at frame {frame}: {a} < {prev}");
            prev = a;
        }
    }

    #[test]
    fn test_velocity_approaches_zero() {
        // Secant slope near p = 1 must be far smaller than near p = 0.
        let start = ease_out_cubic(0.01) - ease_out_cubic(0.0);
        let end = ease_out_cubic(1.0) - ease_out_cubic(0.99);
        assert!(end < start / 100.0, "start {start}, end {end}");
        assert!(end < 1e-5);
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }
}
