//! Wheel model: an ordered list of labeled options and the slice arithmetic
//! that maps a finished rotation to the option under the pointer.
//!
//! Slices are equal-angle and laid out clockwise starting at the pointer
//! (12 o'clock). A spin rotates the whole wheel clockwise in screen space,
//! so after a rotation of `total` degrees the slice under the pointer is the
//! one whose start angle was `(360 - total mod 360) mod 360`.

use crate::error::WheelError;

/// Fewest options a wheel can hold
pub const MIN_OPTIONS: usize = 2;
/// Most options a wheel can hold
pub const MAX_OPTIONS: usize = 8;
/// Degrees in one full turn
pub const FULL_TURN: f64 = 360.0;

/// An ordered list of 2..=8 labeled options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    options: Vec<String>,
}

impl Wheel {
    /// Create a wheel from labels, validating the option count
    pub fn new(options: Vec<String>) -> Result<Self, WheelError> {
        if options.len() < MIN_OPTIONS {
            return Err(WheelError::TooFewOptions(options.len()));
        }
        if options.len() > MAX_OPTIONS {
            return Err(WheelError::TooManyOptions(options.len()));
        }
        Ok(Self { options })
    }

    /// Create a wheel whose labels are the 1-based indices "1".."count"
    pub fn numbered(count: usize) -> Result<Self, WheelError> {
        Self::new((1..=count).map(|i| i.to_string()).collect())
    }

    /// Option labels in slice order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of options (and slices)
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false for a constructed wheel
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Angular width of one slice in degrees
    pub fn slice_angle(&self) -> f64 {
        FULL_TURN / self.len() as f64
    }

    /// Slice index found at screen angle `screen_angle` (degrees, clockwise
    /// from the pointer) when the wheel has been rotated clockwise by
    /// `rotation` degrees.
    pub fn slice_at(&self, screen_angle: f64, rotation: f64) -> usize {
        let original = (screen_angle - rotation).rem_euclid(FULL_TURN);
        let idx = (original / self.slice_angle()).floor() as usize;
        idx.min(self.len() - 1)
    }

    /// Winning slice after a total clockwise rotation of `total_spin` degrees.
    pub fn winner_at(&self, total_spin: f64) -> usize {
        let final_angle = total_spin.rem_euclid(FULL_TURN);
        let under_pointer = (FULL_TURN - final_angle).rem_euclid(FULL_TURN);
        let idx = (under_pointer / self.slice_angle()).floor() as usize;
        // Guards the float edge where `under_pointer / slice` rounds up to n.
        idx.min(self.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(n: usize) -> Wheel {
        Wheel::numbered(n).unwrap()
    }

    #[test]
    fn test_option_count_bounds() {
        assert_eq!(Wheel::numbered(1), Err(WheelError::TooFewOptions(1)));
        assert_eq!(Wheel::numbered(9), Err(WheelError::TooManyOptions(9)));
        assert_eq!(Wheel::new(vec![]), Err(WheelError::TooFewOptions(0)));
        for n in MIN_OPTIONS..=MAX_OPTIONS {
            assert_eq!(wheel(n).len(), n);
        }
    }

    #[test]
    fn test_numbered_labels() {
        assert_eq!(wheel(3).options(), &["1", "2", "3"]);
    }

    #[test]
    fn test_winner_four_slices() {
        let w = wheel(4);
        assert_eq!(w.winner_at(0.0), 0);
        assert_eq!(w.winner_at(90.0), 3);
        assert_eq!(w.winner_at(270.0), 1);
        assert_eq!(w.winner_at(360.0), 0);
        assert_eq!(w.winner_at(1800.0), 0);
    }

    #[test]
    fn test_winner_always_in_range() {
        for n in MIN_OPTIONS..=MAX_OPTIONS {
            let w = wheel(n);
            let mut total = 0.0;
            while total < 3600.0 {
                assert!(w.winner_at(total) < n, "n={n} total={total}");
                total += 7.3;
            }
        }
    }

    #[test]
    fn test_winner_agrees_with_pointer_slice() {
        // The pointer sits at screen angle 0; the winner formula and the
        // renderer's angle-to-slice mapping must pick the same slice there.
        for n in MIN_OPTIONS..=MAX_OPTIONS {
            let w = wheel(n);
            for step in 0..500 {
                let total = step as f64 * 5.1;
                assert_eq!(w.winner_at(total), w.slice_at(0.0, total));
            }
        }
    }

    #[test]
    fn test_slice_at_unrotated() {
        let w = wheel(4);
        assert_eq!(w.slice_at(0.0, 0.0), 0);
        assert_eq!(w.slice_at(89.9, 0.0), 0);
        assert_eq!(w.slice_at(90.0, 0.0), 1);
        assert_eq!(w.slice_at(359.9, 0.0), 3);
    }
}
