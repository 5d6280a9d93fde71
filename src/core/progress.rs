//! Simulated "Data Processing" progress bar.
//!
//! Grows by a random amount each tick and wraps back to a floor of 20% instead
//! of zero so the dashboard never looks idle.

/// Largest increment applied by a single tick (exclusive)
pub const MAX_INCREMENT: f64 = 3.0;

/// Value the bar drops back to after passing 100%
pub const WRAP_FLOOR: f64 = 20.0;

pub const CEILING: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressSimulator {
    value: f64,
}

impl ProgressSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Advance by `unit * MAX_INCREMENT`, where `unit` is a uniform sample
    /// from `[0, 1)`. Returns the new value.
    pub fn advance(&mut self, unit: f64) -> f64 {
        let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
        let next = self.value + unit * MAX_INCREMENT;
        self.value = if self.value >= CEILING || next > CEILING {
            WRAP_FLOOR
        } else {
            next
        };
        self.value
    }

    /// Whole-percent label, e.g. `"42%"`
    pub fn label(&self) -> String {
        format!("{}%", self.value.floor() as u32)
    }

    /// Inline style width for the bar
    pub fn width_style(&self) -> String {
        format!("width: {:.2}%", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_starts_at_zero() {
        let progress = ProgressSimulator::new();
        assert_eq!(progress.value(), 0.0);
        assert_eq!(progress.label(), "0%");
    }

    #[test]
    fn test_increment_bounded() {
        let mut progress = ProgressSimulator::new();
        progress.advance(0.5);
        assert_eq!(progress.value(), 1.5);
        progress.advance(0.999);
        assert!(progress.value() < 1.5 + MAX_INCREMENT);
    }

    #[test]
    fn test_wraps_to_floor() {
        let mut progress = ProgressSimulator { value: 99.0 };
        assert_eq!(progress.advance(0.9), WRAP_FLOOR);
    }

    #[test]
    fn test_exact_ceiling_wraps_next_tick() {
        let mut progress = ProgressSimulator { value: 98.5 };
        assert_eq!(progress.advance(0.5), 100.0);
        assert_eq!(progress.advance(0.0), WRAP_FLOOR);
    }

    #[test]
    fn test_random_walk_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut progress = ProgressSimulator::new();
        let mut wrapped = false;
        for _ in 0..2000 {
            let before = progress.value();
            let after = progress.advance(rng.r#gen::<f64>());
            assert!((0.0..=CEILING).contains(&after));
            if after < before {
                assert_eq!(after, WRAP_FLOOR);
                wrapped = true;
            }
        }
        assert!(wrapped);
    }

    #[test]
    fn test_label_floors() {
        let progress = ProgressSimulator { value: 42.9 };
        assert_eq!(progress.label(), "42%");
        assert_eq!(progress.width_style(), "width: 42.90%");
    }
}
