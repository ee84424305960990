/// A range of real values used for ray parameter bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Same lower bound, with the upper bound replaced.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_size() {
        let interval = Interval::new(2.0, 7.0);
        assert_eq!(interval.size(), 5.0);

        let negative = Interval::new(-5.0, 5.0);
        assert_eq!(negative.size(), 10.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.001, f32::INFINITY);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.001));
        assert!(!interval.surrounds(f32::INFINITY));

        assert!(interval.surrounds(0.0011));
        assert!(interval.surrounds(1e30));

        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(-1.0));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 10.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(5.0), 5.0);
        assert_eq!(interval.clamp(15.0), 10.0);
    }

    #[test]
    fn test_interval_with_max() {
        let narrowed = Interval::new(0.001, f32::INFINITY).with_max(4.0);
        assert_eq!(narrowed, Interval::new(0.001, 4.0));
    }

    #[test]
    fn test_interval_empty_and_universe() {
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(!Interval::EMPTY.surrounds(0.0));

        assert!(Interval::UNIVERSE.contains(1e10));
        assert!(Interval::UNIVERSE.surrounds(-1e10));
        assert_eq!(Interval::UNIVERSE.size(), f32::INFINITY);
    }
}
